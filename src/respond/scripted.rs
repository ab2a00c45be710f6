use std::collections::HashMap;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{ResponseError, ResponseProvider};
use crate::case::NodeCategory;

pub const FALLBACK_RESPONSE: &str = "I don't have specific information about that in my current dataset.";

/// Canned answers keyed by category.
///
/// Selection: the first answer containing the query (case-insensitive),
/// otherwise a uniformly random answer. Unknown or empty categories get
/// [`FALLBACK_RESPONSE`]. An empty query matches the first answer.
#[derive(Debug, Clone)]
pub struct ScriptedResponder<R = ThreadRng> {
    responses: HashMap<String, Vec<String>>,
    rng: R,
}

impl ScriptedResponder<ThreadRng> {
    /// The canned answers of the demo, with a thread-local RNG.
    pub fn demo() -> Self {
        Self::with_rng(demo_responses(), rand::thread_rng())
    }
}

impl<R: Rng> ScriptedResponder<R> {
    pub fn with_rng(responses: HashMap<String, Vec<String>>, rng: R) -> Self {
        Self { responses, rng }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.responses.keys().map(String::as_str)
    }

    fn pick(&mut self, category: &str, query: &str) -> String {
        let Some(answers) = self.responses.get(category) else {
            return FALLBACK_RESPONSE.to_string();
        };

        let needle = query.to_lowercase();
        if let Some(hit) = answers.iter().find(|a| a.to_lowercase().contains(&needle)) {
            return hit.clone();
        }

        answers
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string())
    }
}

impl<R: Rng> ResponseProvider for ScriptedResponder<R> {
    fn respond(&mut self, category: &str, query: &str) -> Result<String, ResponseError> {
        Ok(self.pick(category, query))
    }
}

fn demo_responses() -> HashMap<String, Vec<String>> {
    let table: [(NodeCategory, &[&str]); 4] = [
        (NodeCategory::Events, &[
            "The suspicious package was discovered at 9:45 AM on February 15, 2023 by security guard Michael Johnson during a routine patrol.",
            "The evacuation began at 9:52 AM and was completed by 10:08 AM. All 243 people in the building were safely evacuated.",
            "The bomb squad arrived at 10:15 AM and deployed a robot to examine the package. The controlled detonation was performed at 11:30 AM.",
            "According to the police report, security footage shows the male suspect placing the package at 9:03 AM. He was wearing a gray hoodie and baseball cap.",
            "The courthouse was reopened at 2:30 PM after thorough sweeps confirmed no additional threats.",
        ]),
        (NodeCategory::People, &[
            "John Doe (35) has a history of making threatening calls to government offices. He was previously arrested in 2019 for trespassing at a federal building.",
            "Eyewitness Jane Smith reported seeing someone matching the suspect's description leaving the courthouse parking lot in a blue sedan.",
            "Judge Patricia Williams was presiding over a high-profile drug trafficking case that day. She had received threats in the weeks prior.",
            "Security guard Michael Johnson has worked at the courthouse for 12 years and received commendation for his quick response.",
            "The suspect remains at large. Police have released a composite sketch based on security footage and witness descriptions.",
        ]),
        (NodeCategory::Documents, &[
            "The police report (Case #2023-0215-BT) was filed by Officer Carlos Rodriguez. It details the initial response and evidence collection procedures.",
            "Security footage from three angles shows the suspect entering at 8:57 AM through the north entrance, placing the package at 9:03 AM, and exiting at 9:05 AM.",
            "Forensic analysis of device components shows similarities to a 2018 device, including the use of similar timer mechanisms and detonator wiring patterns.",
            "Witness statements were collected from 17 courthouse staff and visitors. Three witnesses reported seeing the suspect, with consistent descriptions.",
            "The bomb squad report details components of the device, which included a timer, wires, and a non-explosive substance designed to look like C-4.",
        ]),
        (NodeCategory::Similar, &[
            "The 2018 Pineville Courthouse bomb attempt occurred on July 12, 2018. The suspect in that case, Thomas Green, was apprehended and is currently serving a 15-year sentence.",
            "Forensic analysis showed that both the 2018 and 2023 devices had similar wiring patterns and timing mechanisms, suggesting a possible connection or copycat.",
            "In 2021, a threat was made to a government building in Madison County using a different method (called-in bomb threat), but the timing coincided with a similar high-profile drug case.",
            "Analysis of nationwide courthouse threats shows a pattern of incidents occurring during high-profile trials, particularly drug trafficking and organized crime cases.",
            "The FBI has established a task force to investigate potential connections between these cases, focusing on whether the 2023 suspect had contact with Thomas Green while he was in prison.",
        ]),
    ];

    table
        .into_iter()
        .map(|(category, answers)| {
            (category.as_str().to_string(), answers.iter().map(|a| a.to_string()).collect())
        })
        .collect()
}

//! Built-in demo investigation.
//!
//! Stands in for the case builder: the uploaded files are never read, every
//! case view gets this data under the requested name.

use super::types::{CaseData, CaseNode, NodeCategory};

pub const UNKNOWN_CASE: &str = "Unknown Case";

const BASE_SUMMARY: &str = "Investigation into the September 11, 2001 terrorist attacks that resulted in nearly 3,000 deaths across New York, Washington D.C., and Pennsylvania.";
const ENHANCED_SUMMARY_SUFFIX: &str = " The investigation led to fundamental changes in US national security, foreign policy, and counterterrorism strategy.";

/// Case data for a case view. An empty or blank `name` becomes
/// [`UNKNOWN_CASE`]; `database_enhanced` adds the historical-connection node
/// and extends the summary.
pub fn demo_case(name: &str, database_enhanced: bool) -> CaseData {
    let name = match name.trim() {
        "" => UNKNOWN_CASE.to_string(),
        n => n.to_string(),
    };

    let mut nodes = vec![timeline(), bin_laden(), al_qaeda_members(), cia_investigation()];
    let mut summary = BASE_SUMMARY.to_string();

    if database_enhanced {
        nodes.push(historical_connection());
        summary.push_str(ENHANCED_SUMMARY_SUFFIX);
    }

    CaseData { name, summary, nodes }
}

fn timeline() -> CaseNode {
    CaseNode::new(
        "events",
        NodeCategory::Events,
        "Timeline",
        "Four hijacked planes were used in coordinated suicide attacks on the morning of September 11, 2001, targeting symbolic U.S. landmarks. The attacks began at 8:46 AM and concluded with the collapse of both World Trade Center towers by 10:28 AM.",
    )
    .with_reference("/first-upload/timeline.pdf")
    .with_highlights([
        "8:46 AM - Flight 11 crashes into North Tower of World Trade Center",
        "9:03 AM - Flight 175 crashes into South Tower of World Trade Center",
        "9:37 AM - Flight 77 crashes into the Pentagon",
        "9:57 AM - Flight 93 crashes in Shanksville, Pennsylvania",
        "10:28 AM - North Tower of World Trade Center collapses",
    ])
}

fn bin_laden() -> CaseNode {
    CaseNode::new(
        "people",
        NodeCategory::People,
        "Osama Bin Laden",
        "Founder and leader of al-Qaeda who claimed responsibility for the 9/11 attacks. He authorized and funded the operation through a network of cells and couriers. Bin Laden was located and killed in Pakistan in May 2011.",
    )
    .with_highlights([
        "October 2004 - Audio tape claiming responsibility for 9/11 attacks",
        "2007 - Identification of courier Abu Ahmed al-Kuwaiti",
        "2010 - Tracking of courier to Abbottabad compound",
        "May 2, 2011 - Operation Neptune Spear (bin Laden killed)",
    ])
}

fn al_qaeda_members() -> CaseNode {
    CaseNode::new(
        "alQaedaMembers",
        NodeCategory::Documents,
        "Key Al Qaeda Members",
        "The organizational structure behind the 9/11 attacks involved a sophisticated global terrorist network with key operatives fulfilling different roles in planning and executing the attacks.",
    )
    .with_highlights([
        "Leadership - Top-level command and decision makers",
        "Operational Planners - Technical specialists and strategists",
        "Facilitators - Financiers and logistical support",
        "Field Operatives - Hijackers and direct actors",
    ])
    .with_child(
        CaseNode::new(
            "ksm",
            NodeCategory::Documents,
            "Khalid Sheikh Mohammed",
            "The principal architect of the 9/11 attacks who proposed the operational concept to bin Laden in 1996. He coordinated the training of hijackers and oversaw logistical details of the operation. Captured in Pakistan in 2003.",
        )
        .with_highlights([
            "Developed the concept for using aircraft as weapons",
            "Personally selected and trained many of the hijackers",
            "Captured in Rawalpindi, Pakistan on March 1, 2003",
            "Currently held at Guantanamo Bay detention camp",
        ]),
    )
    .with_child(
        CaseNode::new(
            "atta",
            NodeCategory::Documents,
            "Mohamed Atta",
            "The tactical leader of the 9/11 hijackers who piloted American Airlines Flight 11 into the North Tower. He coordinated the hijacker teams in the U.S. and maintained communication with al-Qaeda leadership.",
        )
        .with_highlights([
            "Engineering student in Hamburg, Germany before joining al-Qaeda",
            "Entered the US on a valid visa in June 2000",
            "Completed flight training in Florida",
            "Coordinated the movements of all 19 hijackers",
        ]),
    )
    .with_child(
        CaseNode::new(
            "alQahtani",
            NodeCategory::Documents,
            "Mohammed al-Qahtani",
            "Suspected to be the '20th hijacker' who was denied entry to the United States in August 2001. Intelligence suggests he was meant to join the Flight 93 team. His suspicious behavior triggered enhanced screening at Orlando airport.",
        )
        .with_highlights([
            "Denied entry at Orlando Airport in August 2001",
            "Had $2,800 in cash and suspicious travel patterns",
            "Later captured in Afghanistan in December 2001",
            "Connected to Mohamed Atta through phone records",
        ]),
    )
    .with_child(
        CaseNode::new(
            "alKuwaiti",
            NodeCategory::Documents,
            "Abu Ahmed al-Kuwaiti",
            "Bin Laden's trusted courier whose communications patterns eventually led to locating bin Laden's compound in Abbottabad, Pakistan. His identification in 2007 proved crucial to the intelligence operation that ended in Operation Neptune Spear.",
        )
        .with_highlights([
            "Real name: Ibrahim Saeed Ahmed",
            "Trusted courier who delivered messages for bin Laden",
            "Lived in the Abbottabad compound with bin Laden",
            "Killed during the Operation Neptune Spear raid in 2011",
        ]),
    )
}

fn cia_investigation() -> CaseNode {
    CaseNode::new(
        "ciaInvestigation",
        NodeCategory::Similar,
        "CIA Investigation",
        "One of history's largest intelligence operations that identified the perpetrators and their support networks. Key breakthroughs included tracking bin Laden's courier network and revealing critical pre-attack intelligence failures.",
    )
    .with_highlights([
        "CIA-DS-2001-0715: Mohammed al-Qahtani US Entry Attempt",
        "NSA-SIGINT-2007-0412: Courier Network Identification",
        "DHS-INT-2004-0927: Bin Laden Tape Analysis",
        "DHS-CRU-2001-0901: Flight 93 Timeline Report",
        "9/11 Commission Report (2004)",
    ])
}

fn historical_connection() -> CaseNode {
    CaseNode::new(
        "historical",
        NodeCategory::Similar,
        "Historical Connection",
        "Analysis revealed connections between 9/11 and earlier al-Qaeda operations including the 1993 World Trade Center bombing and 2000 USS Cole attack, showing the evolution from conventional explosives to using aircraft as weapons.",
    )
    .with_highlights([
        "1993 - World Trade Center bombing",
        "1998 - US Embassy bombings in Kenya and Tanzania",
        "2000 - USS Cole bombing in Yemen",
        "2001 - 9/11 attacks marking escalation in tactics",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::compile;

    #[test]
    fn test_base_case_compiles() {
        let data = demo_case("Test", false);
        let graph = compile(&data).unwrap();

        assert_eq!(data.name, "Test");
        assert_eq!(graph.top_level_count(), 4);
        assert_eq!(graph.len(), 8);
        let members = graph.get("alQaedaMembers").unwrap();
        assert_eq!(graph.children(members.nid).count(), 4);
    }

    #[test]
    fn test_enhanced_case_adds_historical() {
        let data = demo_case("Test", true);
        let graph = compile(&data).unwrap();

        assert_eq!(graph.top_level_count(), 5);
        assert!(graph.get("historical").is_some());
        assert!(data.summary.ends_with("counterterrorism strategy."));
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(demo_case("   ", false).name, UNKNOWN_CASE);
    }

    #[test]
    fn test_timeline_has_reference() {
        let data = demo_case("Test", false);
        assert_eq!(data.nodes[0].reference.as_deref(), Some("/first-upload/timeline.pdf"));
    }
}

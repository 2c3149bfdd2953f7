//! Consultation templates: the demo-mode response, the live-mode system
//! instruction, and the error placeholder.

use super::framework::Framework;

/// Fixed body shown when the external text-generation call fails.
pub const CONSULTATION_UNAVAILABLE: &str = "⚠️ The consultation service could not be reached. \
Please try again in a moment — your challenge description has not been lost.";

/// Builds the deterministic demo-mode consultation.
///
/// The text names the selected framework verbatim and always contains a
/// root-cause diagnosis, a two-part recommendation, a two-step action plan
/// and a closing bilingual quote.
pub fn demo_consultation(framework: Framework) -> String {
    let name = framework.display_name();
    format!(
        r#"### ✅ Strategic Analysis based on {name}

**1. Root Cause Diagnosis:**
The core issue is not simply a process failure, but a **lack of understanding of the national importance** of this process. The team has lost connection with the larger goal (Oman Vision 2040: Global Logistics Hub).

**2. Strategic Recommendation (Cultural Fit):**
* **Focus on {name}:** The **{name}** framework suggests aligning the team's personal goals with the national mission.
* **Data Transparency:** Create a simple dashboard that shows each employee's delay impact in terms of "National Opportunity Cost," not just 'man-hours.'

**3. Action Plan:**
1.  **Hold an 'Inspirational' Meeting:** Not a technical review, but a **'Majlis'** style meeting to hear team concerns and redefine their vital role in the national economy.
2.  **Use of AI:** Implement an AI model for automated customs documentation screening to target a clearance time of **6 hours**.

> **✨ Key Takeaway:** *"الاستثمار في الإنسان هو الاستثمار الأنجح لتحقيق رؤية عُمان 2040."* (Investing in people is the most successful investment for achieving Oman Vision 2040.)"#
    )
}

/// Builds the live-mode system instruction for the selected framework.
///
/// The instruction pins the consultation to exactly the selected framework,
/// even when the user's text mentions another one.
pub fn system_instruction(framework: Framework) -> String {
    let name = framework.display_name();
    format!(
        "You are Kokoro Compass, an AI executive coach for leaders in Oman and the wider Gulf \
region. Analyze the user's management challenge using the {name} framework and no other, even \
if the user's text mentions a different methodology.

Respond primarily in English, and include at least one Arabic sentence that ties the advice to \
a regional strategic theme such as Oman Vision 2040.

Structure the response as exactly three Markdown sections, in this order:
### Diagnosis
### Strategic Recommendation
### Action Plan

Close with a single inspirational quote on its own line."
    )
}

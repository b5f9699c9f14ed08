//! # Style Guide Content
//!
//! The fixed reference document shown next to the form and sent to the
//! correction service with every request.

pub const APP_TITLE: &str = "Syntax Guard";
pub const APP_SUBTITLE: &str =
    "Ensure your text aligns perfectly with the company's voice and standards.";

pub const STYLE_GUIDE_TITLE: &str = "Company Style Guide Quick Reference";

pub const STYLE_GUIDE_CONTENT: &str = r#"**Video Lower Thirds – Names and Titles Formatting Guide**
This portion of the style guide outlines the rules for formatting lower-third titles in videos to ensure visual consistency, professional tone, and compliance with internal branding standards. The guidance applies separately to firm personnel and non-firm individuals.

**Names and Titles – firm only**
Video lower-third format:
Line 1: Full name (e.g., Alber Einstein), remove middle initials.
Line 2: Title. Add practice or group name when relevant (e.g., Chair, US Product Liability)
*   Use Title Case (capitalize the first letter of each significant word) for the second line.
*   Keep it clear and concise—use only essential words. For example, no need to add the word “Litigation” to the litigation subgroup name.
*   Do not include the words “practice,” “sector,” or “group” in the title.
*   If a person holds multiple titles, choose the most relevant to the video's subject.
*   Do not use ampersands (&) instead use “and.”
*   Use serial commas (e.g., Product Liability, Mass Torts, and Class Actions).
*   If there is more than one title, use the title most relevant. No need to use "Partner” with another leadership title.
*   Remove "of", "at", from titles. So 'president of accounting at startech' should be: President, Accounting, Startech.

Examples:
Instead of:
Jane Doe
Partner, Co-Chair, US Product Liability, Mass Torts & Class Actions Litigation Group

John Doe,
President of Technology at StarTech

Use:
For Jane Doe:
Co-Chair, US Product Liability, Mass Torts, and Class Actions

For John Doe:
President, Technology, StarTech

Additional Examples (Firm only):
Lisa Simpson
Co-Chair, US Business and Commercial

Gerry Rice
Co-US Managing Partner

Mary Warren
Partner

---

**Names and Titles – Firm and external**
*   When non-firm people appear in a video, include firm name on line 2 after their title and a comma.
*   Non-firm people's second line should include their title, company.
Line 1: Full name (e.g., Jackie Robinson)
Line 2: Title. Add practice or group name when relevant (e.g., Co-US Managing Partner, Firm Name)

Examples (internal and external):
Lisa Simpson
Pro Bono Partner, Firm Name

Jim Henson
Accounting Director, Microsoft

---

**Terminology, Style, and Usage Guidelines**
This section outlines specific language restrictions and stylistic conventions to ensure compliance with ethical standards, maintain clarity across audiences, and promote consistency in legal and professional writing. It includes guidance in the following areas:

**Expert, Specialist**
*   The words **expert**, **expertise**, **specialist**, and **specialized** must **never** be used to describe our lawyers or services, due to the US Bar Association ethics rules.
*   Instead, use an appropriate alternative, such as **dedicated**, **experienced**, **skilled**, or **experience**, **know-how**, or **knowledge**.
*   Do not say that we do **complex** or **sophisticated** work. When set against work not described in this way, it draws attention to the work that is neither of those things.

---

**Partner with our clients**
*   Do not say we “partner with our clients,” per general counsel.

---

**US dollar amounts**
Rule:
*   Add "$" in front of the number for domestic and “US$" for international audience.
*   No space between the $ and number.
*   Example: $5 million for US audience; US$5 million for international.
*   Reason: Differentiate between the US and other countries that also use the dollar.

---

**Punctuation in Latin abbreviations, e.g. and i.e.**
*   Use punctuation and no italics. (e.g., e.g., i.e.)

---

**Degrees**
*   No punctuation for degrees (JD, MBA, LLM, PhD, etc.). Omit periods.
"#;

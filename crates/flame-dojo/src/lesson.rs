//! Foundation lesson text

/// Lesson read at the start of Curriculum One
pub const FOUNDATION_LESSON: &str = "\
Flame Language is a way of writing instructions so that neither a human nor an AI can misread them.

Every Flame sentence has four sections, always marked with a tag:

🔥 [INTENT] says what you are actually trying to achieve. One clear outcome, not a soft wish.

🧠 [CONTEXT] says who this applies to and where it is happening.

🛡️ [BOUNDARY] says what must not happen: the rules, ethics, and red lines that cannot be crossed.

⚙️ [ACTION] says the concrete steps you will take to carry out the intent safely.

A sentence missing any of the four tags is not ready. Vague words like stuff, things, maybe, and kinda weaken every section they touch. Write each section until it could not be misunderstood.";

/// Default polish prompt. `{max_words}` and `{text}` are substituted by
/// [`PromptTemplate::render`].
pub const WISH_POLISH: &str = "You help people hang wishes on a wish tree. \
Rewrite the wish below so it reads concise, warm and positive, \
in no more than {max_words} words. Keep its meaning. \
Reply with the rewritten wish only.\n\nWish: {text}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
    max_words: u32,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>, max_words: u32) -> Self {
        Self {
            template: template.into(),
            max_words,
        }
    }

    pub fn wish_polish(max_words: u32) -> Self {
        Self::new(WISH_POLISH, max_words)
    }

    /// `{max_words}` is filled first so placeholders inside the user's text
    /// are left alone.
    pub fn render(&self, text: &str) -> String {
        self.template
            .replace("{max_words}", &self.max_words.to_string())
            .replace("{text}", text)
    }
}

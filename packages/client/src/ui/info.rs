//! Info page: two pages of static text.

const PAGES: [(&str, &str); 2] = [
    (
        "What is House Party?",
        "House Party lets a group listen to the same music together. The host \
         plays music from their Spotify account and everyone in the room sees \
         what is playing.",
    ),
    (
        "House Party Features",
        "Guests can vote to skip the current song; once enough votes are in, \
         the song is skipped. The host decides how many votes are needed and \
         whether guests may play and pause.",
    ),
];

#[derive(Debug, Clone, Default)]
pub struct InfoPage {
    page: usize,
}

impl InfoPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1) % PAGES.len();
    }

    pub fn prev(&mut self) {
        self.page = (self.page + PAGES.len() - 1) % PAGES.len();
    }

    pub fn render(&self) -> String {
        let (title, body) = PAGES[self.page];
        format!(
            "== {} ==\n{}\n({}/{}) Commands: next, prev, back\n",
            title,
            body,
            self.page + 1,
            PAGES.len()
        )
    }
}

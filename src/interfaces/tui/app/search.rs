//! Inline fuzzy filter over the loaded page

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::state::App;

impl App {
    pub fn start_inline_search(&mut self) {
        self.inline_search_mode = true;
        self.is_searching = true;
        self.search_input.clear();
        self.filter_links_fuzzy();
    }

    /// 按短码、目标地址和描述打分，分数高的在前
    pub fn filter_links_fuzzy(&mut self) {
        let links = self.store.links();
        if self.search_input.trim().is_empty() {
            self.filtered_indices = (0..links.len()).collect();
        } else {
            let pattern = Pattern::parse(
                &self.search_input,
                CaseMatching::Ignore,
                Normalization::Smart,
            );
            let mut matcher = Matcher::new(Config::DEFAULT);
            let mut buf = Vec::new();

            let mut scored: Vec<(usize, u32)> = links
                .iter()
                .enumerate()
                .filter_map(|(i, link)| {
                    let haystack = format!(
                        "{} {} {}",
                        link.short_code,
                        link.url,
                        link.description.as_deref().unwrap_or("")
                    );
                    pattern
                        .score(Utf32Str::new(&haystack, &mut buf), &mut matcher)
                        .map(|score| (i, score))
                })
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            self.filtered_indices = scored.into_iter().map(|(i, _)| i).collect();
        }

        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}

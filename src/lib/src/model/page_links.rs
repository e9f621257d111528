use serde::{Deserialize, Serialize};

/// Page numbers advertised by the upstream `Link` response header.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,
}

impl PageLinks {
    /// Next page, treating a reported page 0 as no page at all.
    pub fn next(&self) -> Option<usize> {
        self.next_page.filter(|page| *page != 0)
    }

    /// Previous page, treating a reported page 0 as no page at all.
    pub fn prev(&self) -> Option<usize> {
        self.prev_page.filter(|page| *page != 0)
    }
}

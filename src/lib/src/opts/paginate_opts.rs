use crate::constants::{DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE};
use crate::util;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginateOpts {
    pub page_num: usize,
    pub page_size: usize,
}

// Add default values
impl Default for PaginateOpts {
    fn default() -> Self {
        PaginateOpts {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginateOpts {
    pub fn for_page(page_num: usize) -> PaginateOpts {
        PaginateOpts {
            page_num,
            ..PaginateOpts::default()
        }
    }

    /// Builds opts from the raw `p` query value, falling back to the first page.
    pub fn from_page_param(param: Option<&str>) -> PaginateOpts {
        PaginateOpts::for_page(util::paginate::page_num_from_param(param))
    }
}

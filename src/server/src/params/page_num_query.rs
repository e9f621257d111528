use libdevlog::constants::PAGE_PARAM;
use libdevlog::opts::PaginateOpts;
use url::form_urlencoded;

/// `?p=<page>` on the dev log index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageNumQuery {
    pub p: Option<String>,
}

impl PageNumQuery {
    /// Never fails. Only the first `p` counts, other pairs are ignored.
    pub fn from_query_str(query: &str) -> PageNumQuery {
        let p = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == PAGE_PARAM)
            .map(|(_, value)| value.into_owned());
        PageNumQuery { p }
    }

    pub fn page_opts(&self) -> PaginateOpts {
        PaginateOpts::from_page_param(self.p.as_deref())
    }
}

use url::Url;

use crate::constants::{DEFAULT_PAGE_NUM, PAGE_PARAM};
use crate::model::PageLinks;
use crate::util::str::split_and_trim;

/// Parses an RFC 8288 `Link` header of the form
/// `<https://api.github.com/...&page=3>; rel="next", <...&page=1>; rel="prev"`
/// into page numbers. Segments that cannot be understood are skipped.
pub fn parse_link_header(value: &str) -> PageLinks {
    let mut links = PageLinks::default();

    for segment in value.split(',') {
        let parts = split_and_trim(segment, ";");
        let Some((target, params)) = parts.split_first() else {
            continue;
        };

        let Some(target) = target
            .strip_prefix('<')
            .and_then(|target| target.strip_suffix('>'))
        else {
            log::debug!("parse_link_header skipping malformed segment: {}", segment);
            continue;
        };

        let Some(page) = page_from_url(target) else {
            continue;
        };

        for rel in params.iter().filter_map(|param| rel_values(param)) {
            for rel in rel.split_whitespace() {
                match rel {
                    "next" => links.next_page = Some(page),
                    "prev" => links.prev_page = Some(page),
                    "first" => links.first_page = Some(page),
                    "last" => links.last_page = Some(page),
                    _ => {}
                }
            }
        }
    }

    log::debug!("parse_link_header {:?}", links);
    links
}

fn rel_values(param: &str) -> Option<&str> {
    let (key, value) = param.split_once('=')?;
    if key.trim() != "rel" {
        return None;
    }
    Some(value.trim().trim_matches('"'))
}

fn page_from_url(target: &str) -> Option<usize> {
    let url = match Url::parse(target) {
        Ok(url) => url,
        Err(err) => {
            log::debug!("parse_link_header invalid url {}: {}", target, err);
            return None;
        }
    };
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, page)| page.parse::<usize>().ok())
}

/// Effective page number for a raw `p` query value. Anything that is not a
/// positive integer falls back to the first page.
pub fn page_num_from_param(param: Option<&str>) -> usize {
    match param.map(|p| p.parse::<usize>()) {
        Some(Ok(page)) if page > 0 => page,
        Some(Err(err)) => {
            log::debug!(
                "ignoring invalid `{}` param {:?}: {}",
                PAGE_PARAM,
                param,
                err
            );
            DEFAULT_PAGE_NUM
        }
        _ => DEFAULT_PAGE_NUM,
    }
}

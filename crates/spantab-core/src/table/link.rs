use crate::dom::first_link_href;
use crate::error::SpantabError;
use crate::fetch::Fetcher;
use crate::options::TableOptions;
use scraper::ElementRef;
use url::Url;

const FOLLOWED_SCHEMES: &[&str] = &["http", "https", "file"];

/// Positions along one axis eligible for link following.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Only(Vec<usize>),
}

impl Selection {
    pub fn contains(&self, position: usize) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(list) => list.contains(&position),
        }
    }

    /// `Some([])` leaves the axis out, `None` engages all of it.
    fn engaged(scope: Option<&[usize]>) -> Option<Selection> {
        match scope {
            Some([]) => None,
            Some(list) => Some(Selection::Only(list.to_vec())),
            None => Some(Selection::All),
        }
    }
}

/// Which cells have their links followed. Rows and columns are exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkFilter {
    Disabled,
    Rows(Selection),
    Columns(Selection),
}

impl LinkFilter {
    pub fn from_scopes(
        rows: Option<&[usize]>,
        columns: Option<&[usize]>,
    ) -> Result<LinkFilter, SpantabError> {
        match (Selection::engaged(rows), Selection::engaged(columns)) {
            (None, None) => Ok(LinkFilter::Disabled),
            (Some(rows), None) => Ok(LinkFilter::Rows(rows)),
            (None, Some(columns)) => Ok(LinkFilter::Columns(columns)),
            (Some(_), Some(_)) => Err(SpantabError::ConflictingLinkScope),
        }
    }

    pub fn from_options(options: &TableOptions) -> Result<LinkFilter, SpantabError> {
        Self::from_scopes(
            options.row_link_scope.as_deref(),
            options.column_link_scope.as_deref(),
        )
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, LinkFilter::Disabled)
    }

    pub fn wants(&self, row: usize, col: usize) -> bool {
        match self {
            LinkFilter::Disabled => false,
            LinkFilter::Rows(selection) => selection.contains(row),
            LinkFilter::Columns(selection) => selection.contains(col),
        }
    }
}

/// Resolve a link target against the page it was found on.
///
/// Targets starting with `/` (protocol-relative `//` ones included) are
/// prefixed with the page's scheme and host.
/// Anything else must already be an absolute http(s) or file URL and is used
/// unchanged. Returns `None` when the target cannot be turned into a URL.
pub fn resolve_link(page_url: Option<&str>, href: &str) -> Option<String> {
    let href = href.trim();
    let url = if href.starts_with('/') {
        let page = Url::parse(page_url?).ok()?;
        let mut prefix = format!("{}://{}", page.scheme(), page.host_str().unwrap_or(""));
        if let Some(port) = page.port() {
            prefix.push_str(&format!(":{port}"));
        }
        Url::parse(&format!("{prefix}{href}")).ok()?
    } else {
        Url::parse(href).ok()?
    };

    if !FOLLOWED_SCHEMES.contains(&url.scheme()) {
        return None;
    }

    if href.starts_with('/') {
        Some(url.into())
    } else {
        Some(href.to_string())
    }
}

/// Follows cell links into a nested lookup and returns what it extracted.
pub struct LinkFollower<'a> {
    filter: LinkFilter,
    page_url: Option<&'a str>,
    nested: Option<&'a TableOptions>,
    fetcher: &'a dyn Fetcher,
}

impl<'a> LinkFollower<'a> {
    pub fn new(options: &'a TableOptions, fetcher: &'a dyn Fetcher) -> Result<Self, SpantabError> {
        Ok(LinkFollower {
            filter: LinkFilter::from_options(options)?,
            page_url: options.url.as_deref(),
            nested: options.on_link.as_deref(),
            fetcher,
        })
    }

    /// Values contributed by the link in the cell at `(row, col)`.
    ///
    /// Empty when the cell is outside the link scope, holds no link, or its
    /// link has no usable target. Fetch and lookup failures of the nested
    /// page are returned as errors.
    pub fn follow(
        &self,
        row: usize,
        col: usize,
        cell: ElementRef<'_>,
    ) -> Result<Vec<String>, SpantabError> {
        if !self.filter.wants(row, col) {
            return Ok(Vec::new());
        }
        let Some(nested) = self.nested else {
            return Ok(Vec::new());
        };
        let Some(target) = first_link_href(cell).and_then(|href| resolve_link(self.page_url, href))
        else {
            return Ok(Vec::new());
        };

        let options = nested.with_url(&target);
        Ok(crate::extract(&options, self.fetcher)?.into_values())
    }
}

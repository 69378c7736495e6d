use yew::prelude::*;

/// Properties for the `DetailViewComponent`.
///
/// Both ids are needed to fetch a record; when either is missing the
/// component shows a prompt instead of fetching.
#[derive(Properties, PartialEq, Clone)]
pub struct DetailViewProps {
    #[prop_or_default]
    pub branch_id: Option<String>,
    #[prop_or_default]
    pub category_id: Option<String>,
}

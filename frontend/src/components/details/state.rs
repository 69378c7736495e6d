use common::model::display::DetailView;

/// State of the `DetailViewComponent`.
pub struct DetailViewComponent {
    /// The rendered record, once fetched.
    pub detail: Option<DetailView>,

    /// A fetch is in flight.
    pub loading: bool,

    /// Message of the last failed fetch.
    pub error: Option<String>,

    /// Guard to avoid fetching more than once.
    pub loaded: bool,
}

impl DetailViewComponent {
    pub fn new() -> Self {
        Self {
            detail: None,
            loading: false,
            error: None,
            loaded: false,
        }
    }
}

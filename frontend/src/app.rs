use crate::components::details::{query_param, DetailViewComponent};
use yew::{html, Component, Context, Html};

/// Root component. The branch and license category come from the page URL,
/// e.g. `/?branch=al-barsha&category=light`.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let branch_id = query_param("branch");
        let category_id = query_param("category");

        html! {
            <div>
                <DetailViewComponent {branch_id} {category_id} />
            </div>
        }
    }
}

//! Detail view: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! On first render the component fetches the stored detail record for its
//! branch and license category, renders it with `common::fees` (fee cards,
//! other-fees table, detail sections) and shows the result. Fetch failures
//! are logged to the console and reported with a toast.

use common::fees::build_detail_view;
use common::model::detail::DetailRecord;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use helpers::query_param;
use helpers::show_toast;
pub use messages::Msg;
pub use props::DetailViewProps;
pub use state::DetailViewComponent;

impl Component for DetailViewComponent {
    type Message = Msg;
    type Properties = DetailViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DetailViewComponent::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        let props = ctx.props();
        let (Some(branch_id), Some(category_id)) =
            (props.branch_id.clone(), props.category_id.clone())
        else {
            return;
        };

        let link = ctx.link().clone();
        link.send_message(Msg::StartLoading);
        spawn_local(async move {
            match fetch_detail(&branch_id, &category_id).await {
                Ok(record) => link.send_message(Msg::SetDetail(build_detail_view(&record))),
                Err(message) => {
                    gloo_console::error!(format!("Loading details failed: {message}"));
                    show_toast("Could not load the course details.");
                    link.send_message(Msg::LoadFailed(message));
                }
            }
        });
    }
}

async fn fetch_detail(branch_id: &str, category_id: &str) -> Result<DetailRecord, String> {
    let url = format!(
        "/api/details/{}/{}",
        String::from(js_sys::encode_uri_component(branch_id)),
        String::from(js_sys::encode_uri_component(category_id)),
    );
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("server answered {}", response.status()));
    }
    response
        .json::<DetailRecord>()
        .await
        .map_err(|e| e.to_string())
}

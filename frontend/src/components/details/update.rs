use super::messages::Msg;
use super::state::DetailViewComponent;

/// Applies a message to the component state. Every message changes what is
/// shown, so all of them re-render.
pub fn update(component: &mut DetailViewComponent, msg: Msg) -> bool {
    match msg {
        Msg::StartLoading => {
            component.loading = true;
            component.error = None;
        }
        Msg::SetDetail(detail) => {
            component.loading = false;
            component.error = None;
            component.detail = Some(detail);
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.detail = None;
            component.error = Some(message);
        }
    }
    true
}

use common::model::display::DetailView;

#[derive(Clone)]
pub enum Msg {
    StartLoading,
    SetDetail(DetailView),
    LoadFailed(String),
}

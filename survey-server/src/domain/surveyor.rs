#[derive(Debug, Clone)]
pub(crate) struct Surveyor {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) office_id: String,
    pub(crate) office_name: String,
}

pub(crate) type Surveyors = Vec<Surveyor>;

/// 調査員の検索条件
#[derive(Debug, Clone, Default)]
pub(crate) struct SurveyorFilter {
    pub(crate) id: String,
    pub(crate) office_id: String,
}

use crate::entities::PlaceCandidate;

pub trait PlacesGateway {
    fn text_search(&self, query: &str) -> anyhow::Result<Vec<PlaceCandidate>>;
}

pub trait LanguageModelGateway {
    fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

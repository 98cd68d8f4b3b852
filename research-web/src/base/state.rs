use crate::components::create_study_form::MemorySubmitter;

#[derive(Clone)]
pub struct GlobalState {
    pub submitter: MemorySubmitter,
    auth_loading: bool,
}

impl GlobalState {
    fn new() -> Self {
        Self {
            submitter: MemorySubmitter::new(),
            // session state is unknown until resolved
            auth_loading: true,
        }
    }

    pub fn is_auth_loading(&self) -> bool {
        self.auth_loading
    }

    pub fn set_auth_loading(&mut self, loading: bool) {
        self.auth_loading = loading;
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{
    remote::SongClient,
    view::{Event, ViewState, execute, reduce, settle},
};

/// Sequential driver: every dispatched event runs its remote call to
/// completion before `dispatch` returns.
///
/// The interactive session does not use this; it keeps several calls in
/// flight and settles them through a channel instead.
pub struct Controller {
    client: SongClient,
    state: ViewState,
}

impl Controller {
    pub fn new(client: SongClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn dispatch(&mut self, event: Event) -> &ViewState {
        let (state, effect) = reduce(std::mem::take(&mut self.state), event);
        self.state = state;

        if let Some(effect) = effect {
            let completion = execute(&self.client, effect.request).await;
            self.state = settle(std::mem::take(&mut self.state), effect.ticket, completion);
        }

        &self.state
    }
}

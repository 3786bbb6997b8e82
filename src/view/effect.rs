use crate::{
    remote::{SongClient, SongError},
    view::{Event, Request},
};

/// Performs `request` against the remote API and turns the outcome into the
/// completion event the reducer expects.
///
/// A lookup that the remote rejects becomes `SongNotFound`; every other
/// failure becomes `RequestFailed` carrying a user-facing message.
pub async fn execute(client: &SongClient, request: Request) -> Event {
    let class = request.class();
    let label = request.label();
    let failed = |e: SongError| Event::RequestFailed {
        class,
        message: format!("Could not {}: {}", label, e),
    };

    match request {
        Request::ListAll => match client.list_all().await {
            Ok(songs) => Event::SongsLoaded(songs),
            Err(e) => failed(e),
        },
        Request::Lookup(id) => match client.get_by_id(&id).await {
            Ok(song) => Event::SongFound(song),
            Err(e) if e.is_not_found() => Event::SongNotFound,
            Err(e) => failed(e),
        },
        Request::Create(draft) => match client.create(&draft).await {
            Ok(song) => Event::SongAdded(song),
            Err(e) => failed(e),
        },
        Request::Update { id, fields } => match client.update(&id, &fields).await {
            Ok(song) => Event::SongUpdated(song),
            Err(e) => failed(e),
        },
        Request::Delete(id) => match client.delete_by_id(&id).await {
            Ok(()) => Event::SongDeleted(id),
            Err(e) => failed(e),
        },
    }
}

use std::io::Write;

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{UnboundedSender, unbounded_channel},
};

use crate::{
    cli::render,
    info,
    remote::SongClient,
    types::SongField,
    view::{Effect, Event, RequestClass, Ticket, ViewState, execute, reduce, settle},
    warning,
};

/// A parsed line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Dispatch(Event),
    Songs,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "list" | "refresh" => SessionCommand::Dispatch(Event::LoadRequested),
        "songs" => SessionCommand::Songs,
        "search" => SessionCommand::Dispatch(Event::SearchSubmitted(rest.to_string())),
        "edit" => SessionCommand::Dispatch(Event::EditRequested),
        "set" => {
            let (field, value) = field_and_value(rest, "set")?;
            SessionCommand::Dispatch(Event::EditFieldChanged(field, value))
        }
        "save" => SessionCommand::Dispatch(Event::UpdateSubmitted),
        "cancel" => SessionCommand::Dispatch(Event::EditCancelled),
        "delete" => SessionCommand::Dispatch(Event::DeleteSubmitted),
        "close" => SessionCommand::Dispatch(Event::Deselected),
        "new" => {
            let (field, value) = field_and_value(rest, "new")?;
            SessionCommand::Dispatch(Event::NewSongFieldChanged(field, value))
        }
        "add" => SessionCommand::Dispatch(Event::AddSubmitted),
        "dismiss" => SessionCommand::Dispatch(Event::ErrorDismissed),
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };

    Ok(Some(command))
}

fn field_and_value(rest: &str, command: &str) -> Result<(SongField, String), String> {
    if rest.is_empty() {
        return Err(format!("Usage: {} FIELD VALUE", command));
    }

    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };
    Ok((field.parse::<SongField>()?, value.to_string()))
}

/// Runs the interactive session until `quit` or end of input.
///
/// Remote calls run as spawned tasks; their completions come back over a
/// single-consumer channel and are settled on this loop. An outdated list or
/// search response is dropped; a confirmed create, update or delete always
/// reaches the collection.
pub async fn session(client: SongClient) {
    let (tx, mut rx) = unbounded_channel::<(Ticket, Event)>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Connected to {}", client.base_url());
    render::help();
    let mut state = submit(ViewState::default(), Event::LoadRequested, &client, &tx);
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => match parse_command(&line) {
                        Ok(None) => {}
                        Ok(Some(SessionCommand::Quit)) => break,
                        Ok(Some(SessionCommand::Help)) => render::help(),
                        Ok(Some(SessionCommand::Show)) => render::view(&state),
                        Ok(Some(SessionCommand::Songs)) => render::song_table(state.songs()),
                        Ok(Some(SessionCommand::Dispatch(event))) => {
                            state = submit(state, event, &client, &tx);
                            render::view(&state);
                        }
                        Err(e) => warning!("{}", e),
                    },
                    Ok(None) => break,
                    Err(e) => {
                        warning!("Cannot read input: {}", e);
                        break;
                    }
                }
                prompt();
            }
            Some((ticket, event)) = rx.recv() => {
                if !state.tickets().is_current(ticket) && ticket.class != RequestClass::Mutate {
                    info!("Ignoring an outdated response.");
                    continue;
                }
                println!();
                state = settle(state, ticket, event);
                render::view(&state);
                prompt();
            }
        }
    }
}

fn submit(
    state: ViewState,
    event: Event,
    client: &SongClient,
    tx: &UnboundedSender<(Ticket, Event)>,
) -> ViewState {
    let (state, effect) = reduce(state, event);

    if let Some(Effect { ticket, request }) = effect {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let completion = execute(&client, request).await;
            // the receiver only goes away when the session ends
            let _ = tx.send((ticket, completion));
        });
    }

    state
}

fn prompt() {
    print!("songs> ");
    let _ = std::io::stdout().flush();
}

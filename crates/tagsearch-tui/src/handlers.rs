//! Gesture handlers — the closed set of things a user can do to the store.
//!
//! | Gesture        | Handler                |
//! |----------------|------------------------|
//! | save           | [`on_save`]            |
//! | tap            | [`on_open`]            |
//! | long press     | [`on_long_press`]      |
//! | menu choice    | [`on_action`]          |
//! | confirm delete | [`on_confirm_delete`]  |
//!
//! Events arriving while a dialog is open go through [`on_modal_event`],
//! which routes them to the handlers above.

use crate::app::{AppState, Focus, Modal, Status};
use crate::event::{AppEvent, Direction};
use tagsearch_core::Action;

/// Save the query/tag pair in the input fields. An empty field opens the
/// missing-input dialog and leaves the store alone.
pub fn on_save(s: &mut AppState) {
    if s.query.is_empty() || s.tag.is_empty() {
        tracing::debug!(
            query_empty = s.query.is_empty(),
            tag_empty = s.tag.is_empty(),
            "save rejected: missing input"
        );
        s.modal = Some(Modal::MissingInput);
        return;
    }

    let tag = s.tag.value.clone();
    let query = s.query.value.clone();
    s.store.add_or_update(&tag, &query);

    s.query.clear();
    s.tag.clear();
    s.list.observe(&s.store);
    // An update keeps the stored spelling; report that one.
    let saved = match s.store.position(&tag) {
        Some(idx) => {
            s.list.select(idx);
            s.store.get(idx).map_or(tag, |e| e.tag.clone())
        }
        None => tag,
    };
    s.focus = Focus::List;
    s.status = Some(Status::Info(format!("Saved \"{saved}\"")));
}

/// Open the selected tag's search in the browser.
pub fn on_open(s: &mut AppState) {
    let Some(tag) = s.list.selected_tag(&s.store).map(str::to_string) else {
        return;
    };
    let url = s.store.build_search_url(&tag);
    s.status = Some(match s.launcher.open_url(&url) {
        Ok(()) => {
            tracing::info!(tag = %tag, url = %url, "opened search");
            Status::Info(format!("Opened {url}"))
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not open browser");
            Status::Error(format!("Could not open browser: {e}"))
        }
    });
}

/// Open the share / edit / delete menu for the selected tag.
pub fn on_long_press(s: &mut AppState) {
    if let Some(tag) = s.list.selected_tag(&s.store) {
        tracing::debug!(tag = %tag, "action menu opened");
        s.modal = Some(Modal::Actions {
            tag: tag.to_string(),
            cursor: 0,
        });
    }
}

/// Carry out a menu choice for `tag`.
pub fn on_action(s: &mut AppState, tag: String, action: Action) {
    tracing::debug!(tag = %tag, action = %action, "menu action");
    match action {
        Action::Share => {
            let payload = s.store.share_payload(&tag);
            s.status = Some(match s.launcher.share(&payload) {
                Ok(()) => Status::Info(format!("Shared \"{tag}\"")),
                Err(e) => {
                    tracing::warn!(error = %e, "could not share search");
                    Status::Error(format!("Could not share: {e}"))
                }
            });
            s.modal = Some(Modal::Share(payload));
        }
        Action::Edit => {
            let query = s.store.lookup_query(&tag).to_string();
            s.tag.set(tag);
            s.query.set(query);
            s.focus = Focus::Query;
        }
        Action::Delete => {
            s.modal = Some(Modal::ConfirmDelete {
                tag,
                delete_focused: true,
            });
        }
    }
}

/// The user confirmed deleting `tag`.
pub fn on_confirm_delete(s: &mut AppState, tag: &str) {
    if s.store.delete(tag) {
        s.status = Some(Status::Info(format!("Deleted \"{tag}\"")));
    }
}

/// Route an event to whichever dialog is open.
pub fn on_modal_event(s: &mut AppState, event: AppEvent) {
    let Some(modal) = s.modal.take() else {
        return;
    };

    let next = match modal {
        Modal::MissingInput => match event {
            AppEvent::Enter | AppEvent::Escape | AppEvent::Char(' ') => {
                tracing::debug!("missing-input dialog dismissed");
                None
            }
            _ => Some(Modal::MissingInput),
        },

        Modal::Actions { tag, cursor } => match event {
            AppEvent::Nav(Direction::Up) => Some(Modal::Actions {
                tag,
                cursor: cursor.saturating_sub(1),
            }),
            AppEvent::Nav(Direction::Down) => Some(Modal::Actions {
                tag,
                cursor: (cursor + 1).min(Action::ALL.len() - 1),
            }),
            AppEvent::Enter => {
                if let Some(action) = Action::from_index(cursor) {
                    on_action(s, tag, action);
                }
                return;
            }
            AppEvent::Char(c) => match menu_shortcut(c) {
                Some(action) => {
                    on_action(s, tag, action);
                    return;
                }
                None => Some(Modal::Actions { tag, cursor }),
            },
            AppEvent::Escape => {
                tracing::debug!("action menu cancelled");
                None
            }
            _ => Some(Modal::Actions { tag, cursor }),
        },

        Modal::ConfirmDelete {
            tag,
            delete_focused,
        } => match event {
            AppEvent::Nav(Direction::Left | Direction::Right)
            | AppEvent::FocusNext
            | AppEvent::FocusPrev => Some(Modal::ConfirmDelete {
                tag,
                delete_focused: !delete_focused,
            }),
            AppEvent::Enter if delete_focused => {
                on_confirm_delete(s, &tag);
                None
            }
            AppEvent::Char('y' | 'Y') => {
                on_confirm_delete(s, &tag);
                None
            }
            AppEvent::Enter | AppEvent::Escape | AppEvent::Char('n' | 'N') => {
                tracing::debug!(tag = %tag, "delete cancelled");
                None
            }
            _ => Some(Modal::ConfirmDelete {
                tag,
                delete_focused,
            }),
        },

        Modal::Share(payload) => match event {
            AppEvent::Enter | AppEvent::Escape => None,
            _ => Some(Modal::Share(payload)),
        },
    };

    s.modal = next;
}

/// Number keys follow menu order; letters are the item initials.
fn menu_shortcut(c: char) -> Option<Action> {
    match c {
        '1' | 's' | 'S' => Some(Action::Share),
        '2' | 'e' | 'E' => Some(Action::Edit),
        '3' | 'd' | 'D' => Some(Action::Delete),
        _ => None,
    }
}

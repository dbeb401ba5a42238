// Jorybord – a daily word-search puzzle game
// Copyright (C) 2026  Jorybord contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt::Write;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;
use super::daily;
use super::dictionary::Dictionary;
use super::drag::DragTracker;
use super::game::GameSession;
use super::grid::{Grid, GRID_SIZE};
use super::line::BoardMetrics;
use super::save_state::{self, SaveState, Store, StoreUnavailable};

fn show_error(message: &str) {
    console::log_1(&message.into());

    let Some(window) = web_sys::window()
    else {
        return;
    };

    let Some(document) = window.document()
    else {
        return;
    };

    let Some(message_elem) = document.get_element_by_id("message")
    else {
        return;
    };

    message_elem.set_text_content(Some("An error occurred"));
}

struct Context {
    document: web_sys::Document,
    window: web_sys::Window,
}

impl Context {
    fn new() -> Result<Context, String> {
        let Some(window) = web_sys::window()
        else {
            return Err("failed to get window".to_string());
        };

        let Some(document) = window.document()
        else {
            return Err("failed to get document".to_string());
        };

        Ok(Context {
            document,
            window,
        })
    }
}

struct LocalStorage {
    storage: web_sys::Storage,
}

impl Store for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreUnavailable> {
        self.storage.set_item(key, value).map_err(|_| StoreUnavailable)
    }

    fn remove(&mut self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

// A seed in the query string replaces the daily seed and bypasses the
// save store so a shared board can be replayed freely
fn custom_seed_from_query(window: &web_sys::Window) -> Option<String> {
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(&search);

    for part in query.split('&') {
        if let Some(seed) = part.strip_prefix("seed=") {
            if !seed.is_empty() {
                return Some(seed.replace('+', " "));
            }
        }
    }

    None
}

fn single_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let ch = chars.next()?;

    if chars.next().is_none() && ch.is_ascii_alphabetic() {
        Some(ch)
    } else {
        None
    }
}

type EventClosure = Closure::<dyn FnMut(JsValue)>;

struct Jorybord {
    context: Context,
    dictionary: Dictionary,
    session: GameSession,
    drag: DragTracker,
    store: Option<LocalStorage>,
    board: web_sys::HtmlElement,
    boxes: Vec<web_sys::HtmlElement>,

    pointer_down_closure: Option<EventClosure>,
    pointer_move_closure: Option<EventClosure>,
    pointer_up_closure: Option<EventClosure>,
    keydown_closure: Option<EventClosure>,

    floating_pointer: Option<*mut Jorybord>,
}

impl Jorybord {
    fn new(context: Context) -> Result<Box<Jorybord>, String> {
        let Some(board) = context.document.get_element_by_id("board")
            .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return Err("failed to get board".to_string());
        };

        let custom_seed = custom_seed_from_query(&context.window);

        let mut store = context
            .window
            .local_storage()
            .ok()
            .flatten()
            .map(|storage| LocalStorage { storage });

        let session = match custom_seed {
            Some(seed) => GameSession::new(&seed, true),
            None => {
                let seed = daily::today_seed();

                match store.as_mut() {
                    Some(store) => {
                        save_state::start_session(store, &seed, false)
                    },
                    None => GameSession::new(&seed, false),
                }
            },
        };

        let mut boxes = Vec::with_capacity(GRID_SIZE * GRID_SIZE);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let Some(cell) = context.document.create_element("div").ok()
                    .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
                else {
                    return Err("failed to create cell element".to_string());
                };

                let _ = cell.set_attribute("class", "cell");

                let Some(letter_box) =
                    context.document.create_element("div").ok()
                        .and_then(|c| {
                            c.dyn_into::<web_sys::HtmlElement>().ok()
                        })
                else {
                    return Err("failed to create box element".to_string());
                };

                let _ = letter_box.set_attribute("class", "box");
                let _ = letter_box.set_attribute(
                    "id",
                    &format!("box{}{}", col, row),
                );

                let _ = cell.append_with_node_1(&letter_box);
                let _ = board.append_with_node_1(&cell);

                boxes.push(letter_box);
            }
        }

        let jorybord = Box::new(Jorybord {
            context,
            dictionary: Dictionary::embedded(),
            session,
            drag: DragTracker::new(),
            store,
            board,
            boxes,
            pointer_down_closure: None,
            pointer_move_closure: None,
            pointer_up_closure: None,
            keydown_closure: None,
            floating_pointer: None,
        });

        jorybord.render();
        jorybord.update_score();

        Ok(jorybord)
    }

    fn register_events(&mut self) {
        let floating_pointer = match self.floating_pointer {
            Some(p) => p,
            None => unreachable!(),
        };

        let pointer_down_closure = EventClosure::new(move |v: JsValue| {
            let event: web_sys::MouseEvent = v.dyn_into().unwrap();
            unsafe {
                (*floating_pointer).handle_pointer_down(event);
            }
        });

        let pointer_move_closure = EventClosure::new(move |v: JsValue| {
            let event: web_sys::MouseEvent = v.dyn_into().unwrap();
            unsafe {
                (*floating_pointer).handle_pointer_move(event);
            }
        });

        let pointer_up_closure = EventClosure::new(move |_: JsValue| {
            unsafe {
                (*floating_pointer).handle_pointer_up();
            }
        });

        let keydown_closure = EventClosure::new(move |v: JsValue| {
            let event: web_sys::KeyboardEvent = v.dyn_into().unwrap();
            unsafe {
                (*floating_pointer).handle_key(event);
            }
        });

        let document = &self.context.document;

        let _ = document.add_event_listener_with_callback(
            "mousedown",
            pointer_down_closure.as_ref().unchecked_ref(),
        );
        let _ = document.add_event_listener_with_callback(
            "mousemove",
            pointer_move_closure.as_ref().unchecked_ref(),
        );
        let _ = document.add_event_listener_with_callback(
            "mouseup",
            pointer_up_closure.as_ref().unchecked_ref(),
        );
        let _ = document.add_event_listener_with_callback(
            "keydown",
            keydown_closure.as_ref().unchecked_ref(),
        );

        self.pointer_down_closure = Some(pointer_down_closure);
        self.pointer_move_closure = Some(pointer_move_closure);
        self.pointer_up_closure = Some(pointer_up_closure);
        self.keydown_closure = Some(keydown_closure);
    }

    fn metrics(&self) -> Option<BoardMetrics> {
        let rect = self.board.get_bounding_client_rect();
        let box_size = rect.width() / GRID_SIZE as f64;

        if box_size > 0.0 {
            Some(BoardMetrics {
                left: rect.left(),
                top: rect.top(),
                box_size,
            })
        } else {
            None
        }
    }

    // Projects the engine state onto the box elements. The DOM is
    // never read back; everything comes from the session and the
    // drag tracker.
    fn render(&self) {
        let grid = self.session.visible_grid();
        let selection = self.drag.cells();
        let target = self.drag.target();
        let selecting = self.drag.is_selecting();

        for (index, pos) in Grid::positions().enumerate() {
            let element = &self.boxes[index];
            let cell = grid.cell(pos);

            let mut class = "box".to_string();

            if cell.locked {
                class.push_str(" locked");
            }

            if let Some(length) = cell.tier.word_length() {
                write!(class, " scored length{}", length).unwrap();
            }

            if selection.contains(&pos) {
                class.push_str(" highlighted");

                if selecting {
                    class.push_str(" selectable");
                }
            }

            let text = if target == Some(pos) {
                class.push_str(" selected");
                "__".to_string()
            } else {
                cell.letter.to_string()
            };

            let _ = element.set_attribute("class", &class);
            element.set_text_content(Some(&text));
        }

        let _ = self.board.set_attribute(
            "class",
            if self.session.is_finished() {
                "finished"
            } else {
                ""
            },
        );
    }

    fn update_score(&self) {
        let score = self.session.score().to_string();
        let elements =
            self.context.document.get_elements_by_class_name("score");

        for i in 0..elements.length() {
            if let Some(element) = elements.item(i) {
                element.set_text_content(Some(&score));
            }
        }
    }

    fn save(&mut self) {
        if self.session.uses_custom_seed() {
            return;
        }

        let Some(store) = self.store.as_mut()
        else {
            return;
        };

        let state = SaveState::from_session(&self.session);

        if save_state::save(store, &state).is_err() {
            // Keep playing without saves
            console::log_1(&"failed to save the game".into());
        }
    }

    fn handle_pointer_down(&mut self, event: web_sys::MouseEvent) {
        // Button presses are delegated off the drag path
        if let Some(element) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            if let Some(key) = element.get_attribute("data-key") {
                if let Some(letter) = single_letter(&key) {
                    self.input_letter(letter);
                }

                return;
            }

            match element.id().as_str() {
                "undo" => {
                    self.undo();
                    return;
                },
                "share" => {
                    self.share();
                    return;
                },
                "history-back" => {
                    self.history_back();
                    return;
                },
                "history-forward" => {
                    self.history_forward();
                    return;
                },
                _ => (),
            }
        }

        let Some(metrics) = self.metrics()
        else {
            return;
        };

        let x = event.client_x() as f64;
        let y = event.client_y() as f64;
        let hit = if metrics.contains(x, y) {
            Some(metrics.cell_at(x, y))
        } else {
            None
        };

        // A viewed past state is read-only; selection starts again
        // once the player returns to the latest state
        if self.session.is_viewing_history() {
            return;
        }

        self.drag.pointer_down(self.session.latest_grid(), hit);
        self.render();
    }

    fn handle_pointer_move(&mut self, event: web_sys::MouseEvent) {
        let Some(metrics) = self.metrics()
        else {
            return;
        };

        // Only a changed run is worth a redraw
        if self.drag.pointer_move(
            &metrics,
            event.client_x() as f64,
            event.client_y() as f64,
        ) {
            self.render();
        }
    }

    fn handle_pointer_up(&mut self) {
        self.drag.pointer_up();
        self.render();
    }

    fn handle_key(&mut self, event: web_sys::KeyboardEvent) {
        let key = event.key();

        if key == "Backspace" {
            self.undo();
        } else if let Some(letter) = single_letter(&key) {
            self.input_letter(letter);
        }
    }

    // A letter press spends the selection whether or not the word is
    // accepted
    fn input_letter(&mut self, letter: char) {
        let Some((positions, target)) = self.drag.take_selection()
        else {
            return;
        };

        match self.session.propose_move(
            &self.dictionary,
            &positions,
            target,
            letter,
        ) {
            Ok(_) => {
                self.save();
            },
            Err(e) => {
                console::log_1(&e.to_string().into());
            },
        }

        self.render();
        self.update_score();
    }

    fn undo(&mut self) {
        match self.session.undo() {
            Ok(()) => {
                self.drag.reset();
                self.render();
                self.update_score();
                self.save();
            },
            Err(e) => {
                console::log_1(&e.to_string().into());
            },
        }
    }

    fn history_back(&mut self) {
        let n_moves = self.session.history().len();

        match self.session.viewing_history_index() {
            None => {
                if n_moves >= 2 {
                    self.session.view_history(n_moves - 2);
                    self.drag.reset();
                    self.render();
                }
            },
            Some(0) => (),
            Some(index) => {
                self.session.view_history(index - 1);
                self.render();
            },
        }
    }

    fn history_forward(&mut self) {
        let n_moves = self.session.history().len();

        if let Some(index) = self.session.viewing_history_index() {
            if index + 2 >= n_moves {
                self.session.view_latest();
            } else {
                self.session.view_history(index + 1);
            }

            self.render();
        }
    }

    fn share(&mut self) {
        let text = save_state::share_text(&self.session);
        let clipboard = self.context.window.navigator().clipboard();

        // Fire and forget; the promise resolving has nothing for us
        let _ = clipboard.write_text(&text);
    }
}

#[wasm_bindgen]
pub fn init_jorybord() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let context = match Context::new() {
        Ok(c) => c,
        Err(e) => {
            show_error(&e);
            return;
        }
    };

    match Jorybord::new(context) {
        Ok(jorybord) => {
            // Leak the game object so that it lives as long as the
            // web page
            let floating_pointer = Box::into_raw(jorybord);

            unsafe {
                (*floating_pointer).floating_pointer = Some(floating_pointer);
                (*floating_pointer).register_events();
            }
        },
        Err(e) => show_error(&e),
    }
}

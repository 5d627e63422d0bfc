//! The application: wiring, message dispatch, and the run loop.
//!
//! `App` owns the document, the store, and the three views, and drives the
//! keyboard drag-and-drop gesture: Enter or Space grabs the selected card
//! (drag start, then drag over the source bucket), Left and Right move the
//! hover between buckets (drag leave the old, drag over the new), Enter or
//! Space again delivers the drop, Esc cancels. Every step goes through the
//! event hub, so the gesture exercises the same handlers a pointer would.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use plank_config::Config;
use plank_core::{ItemId, ItemStore, Message, Status, demo};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::component::ComponentError;
use crate::dom::{Document, TemplateNode};
use crate::drag::DragTransfer;
use crate::event::{key_to_message, poll_event};
use crate::events::{EventHub, NotifyEvent, TransferEvent};
use crate::state::{AppState, DragContext, Focus};
use crate::terminal::AppTerminal;
use crate::views::{InputView, ItemView, ListView};
use crate::widgets;
use crate::widgets::form::FORM_HEIGHT;

/// Builds the document every view mounts into: the three templates and the
/// `app` host element.
fn build_document() -> Document {
    let mut doc = Document::new();

    doc.register_template(
        ItemView::TEMPLATE,
        TemplateNode::new("li")
            .child(TemplateNode::new("h2"))
            .child(TemplateNode::new("h3"))
            .child(TemplateNode::new("p")),
    );
    doc.register_template(
        ListView::TEMPLATE,
        TemplateNode::new("section")
            .child(TemplateNode::new("header").child(TemplateNode::new("h2")))
            .child(TemplateNode::new("ul")),
    );
    doc.register_template(
        InputView::TEMPLATE,
        TemplateNode::new("form")
            .child(TemplateNode::new("input").with_id("title"))
            .child(TemplateNode::new("textarea").with_id("description"))
            .child(TemplateNode::new("input").with_id("people")),
    );

    let host = doc.create_element("div");
    doc.set_elem_id(host, "app");
    let root = doc.root();
    doc.append_child(root, host);

    doc
}

/// The running application.
pub struct App {
    doc: Rc<RefCell<Document>>,
    hub: Rc<EventHub>,
    store: Rc<ItemStore>,
    input: Rc<InputView>,
    lists: [Rc<ListView>; 2],
    state: AppState,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    /// Builds the document, mounts the views, and seeds demo items when the
    /// config asks for them.
    ///
    /// # Errors
    ///
    /// Returns an error if a view fails to mount, which means the document
    /// setup above is broken; there is no recovery.
    pub fn new(config: &Config) -> Result<Self, ComponentError> {
        let doc = Rc::new(RefCell::new(build_document()));
        let hub = Rc::new(EventHub::new());
        let store = Rc::new(ItemStore::new());

        let input = InputView::new(Rc::clone(&doc), Rc::clone(&hub), Rc::clone(&store))?;
        let active = ListView::new(
            Rc::clone(&doc),
            Rc::clone(&hub),
            Rc::clone(&store),
            Status::Active,
        )?;
        let finished = ListView::new(
            Rc::clone(&doc),
            Rc::clone(&hub),
            Rc::clone(&store),
            Status::Finished,
        )?;

        // Views are subscribed by now, so seeding renders immediately
        if config.demo_items {
            demo::seed_demo(&store);
        }

        Ok(Self {
            doc,
            hub,
            store,
            input,
            lists: [active, finished],
            state: AppState::new(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
        })
    }

    /// The shared item store.
    #[must_use]
    pub fn store(&self) -> &Rc<ItemStore> {
        &self.store
    }

    /// The input form view.
    #[must_use]
    pub fn input(&self) -> &InputView {
        &self.input
    }

    /// The list view for a bucket.
    #[must_use]
    pub fn list(&self, status: Status) -> &ListView {
        &self.lists[status.index()]
    }

    /// The UI state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether the application has been asked to exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one message to the application.
    pub fn update(&mut self, message: Message) {
        if message.is_terminating() {
            self.should_quit = true;
            return;
        }

        // A blocking alert swallows the next key, whatever it is
        if self.state.alert.is_some() {
            self.state.alert = None;
            return;
        }

        if self.state.show_help {
            if matches!(message, Message::ToggleHelp | Message::Escape) {
                self.state.show_help = false;
            }
            return;
        }

        match message {
            Message::Escape => {
                if self.state.drag.is_some() {
                    self.cancel_drag();
                }
            }
            Message::FocusNext => {
                if self.state.drag.is_some() {
                    self.cancel_drag();
                }
                self.state.focus_next();
            }
            Message::FocusPrev => {
                if self.state.drag.is_some() {
                    self.cancel_drag();
                }
                self.state.focus_prev();
            }
            Message::Input(c) => {
                if let Focus::Form(field) = self.state.focus {
                    self.input.append_char(field, c);
                }
            }
            Message::DeleteChar => {
                if let Focus::Form(field) = self.state.focus {
                    self.input.delete_char(field);
                }
            }
            Message::Submit => {
                if self.state.is_typing() {
                    self.input.submit();
                    self.drain_alert();
                }
            }
            Message::NavigateLeft => self.navigate_bucket(Status::Active),
            Message::NavigateRight => self.navigate_bucket(Status::Finished),
            Message::NavigateUp => {
                if matches!(self.state.focus, Focus::Board) {
                    let len = self.current_len();
                    self.state.navigate_up(len);
                }
            }
            Message::NavigateDown => {
                if matches!(self.state.focus, Focus::Board) {
                    let len = self.current_len();
                    self.state.navigate_down(len);
                }
            }
            Message::Select => {
                if matches!(self.state.focus, Focus::Board) {
                    if self.state.drag.is_some() {
                        self.complete_drop();
                    } else {
                        self.start_drag();
                    }
                }
            }
            Message::ToggleHelp => self.state.show_help = true,
            Message::Quit => self.should_quit = true,
        }
    }

    fn current_len(&self) -> usize {
        self.lists[self.state.selected_bucket.index()].len()
    }

    fn navigate_bucket(&mut self, to: Status) {
        if !matches!(self.state.focus, Focus::Board) {
            return;
        }
        if self.state.drag.is_some() {
            self.retarget_drag(to);
        }
        self.state.selected_bucket = to;
        let len = self.current_len();
        self.state.clamp_selection(len);
    }

    /// Grabs the selected card: drag start on the card, then drag over the
    /// source bucket, which is the hovered target at grab time.
    fn start_drag(&mut self) {
        let bucket = self.state.selected_bucket;
        let (item_id, card) = {
            let list = &self.lists[bucket.index()];
            match (
                list.item_at(self.state.selected_item),
                list.child_root(self.state.selected_item),
            ) {
                (Some(item), Some(card)) => (item.id, card),
                _ => return,
            }
        };

        let mut transfer = DragTransfer::new();
        self.hub
            .dispatch_transfer(card, TransferEvent::DragStart, &mut transfer);

        transfer.reset_drop();
        self.hub.dispatch_transfer(
            self.lists[bucket.index()].root(),
            TransferEvent::DragOver,
            &mut transfer,
        );

        self.state.drag = Some(DragContext {
            item_id,
            source: bucket,
            over: bucket,
            transfer,
        });
    }

    /// Moves the hover to another bucket: drag leave the old target, then
    /// drag over the new one with the drop permission withdrawn.
    fn retarget_drag(&mut self, to: Status) {
        let Some(mut drag) = self.state.drag.take() else {
            return;
        };
        if drag.over != to {
            self.hub
                .dispatch_notify(self.lists[drag.over.index()].root(), NotifyEvent::DragLeave);
            drag.transfer.reset_drop();
            self.hub.dispatch_transfer(
                self.lists[to.index()].root(),
                TransferEvent::DragOver,
                &mut drag.transfer,
            );
            drag.over = to;
        }
        self.state.drag = Some(drag);
    }

    /// Delivers the drop to the hovered bucket if it allowed one, then ends
    /// the gesture.
    fn complete_drop(&mut self) {
        let Some(mut drag) = self.state.drag.take() else {
            return;
        };
        let target = self.lists[drag.over.index()].root();

        if drag.transfer.is_drop_allowed() {
            self.hub
                .dispatch_transfer(target, TransferEvent::Drop, &mut drag.transfer);
        }

        // The keyboard gesture ends here; the hover highlight goes with it
        self.hub.dispatch_notify(target, NotifyEvent::DragLeave);
        self.dispatch_drag_end(drag.item_id);

        let len = self.current_len();
        self.state.clamp_selection(len);
    }

    /// Abandons the gesture without delivering anything.
    fn cancel_drag(&mut self) {
        let Some(drag) = self.state.drag.take() else {
            return;
        };
        self.hub
            .dispatch_notify(self.lists[drag.over.index()].root(), NotifyEvent::DragLeave);
        self.dispatch_drag_end(drag.item_id);
    }

    /// Notifies the card's drag-end hook, wherever the card now renders.
    fn dispatch_drag_end(&self, item_id: ItemId) {
        for list in &self.lists {
            if let Some(card) = list.node_for(item_id) {
                self.hub.dispatch_notify(card, NotifyEvent::DragEnd);
                return;
            }
        }
    }

    /// Surfaces a pending document alert as the blocking overlay.
    fn drain_alert(&mut self) {
        if let Some(message) = self.doc.borrow_mut().take_alert() {
            self.state.alert = Some(message);
        }
    }

    /// Draws one frame into a buffer.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        widgets::render_form(&self.input, &self.state.focus, chunks[0], buf);
        {
            let doc = self.doc.borrow();
            widgets::render_board(&doc, &self.lists, &self.state, chunks[1], buf);
        }
        widgets::render_status_bar(&self.state, chunks[2], buf);

        if let Some(message) = &self.state.alert {
            widgets::render_alert(message, area, buf);
        }
        if self.state.show_help {
            widgets::render_help(area, buf);
        }
    }

    /// Draws one frame.
    pub fn view(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        self.render(area, frame.buffer_mut());
    }

    /// The draw / poll / update loop. Returns when a quit message arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or event polling fails.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> std::io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(Event::Key(key)) = poll_event(self.poll_interval)? {
                if key.kind == KeyEventKind::Press {
                    if let Some(message) = key_to_message(key, self.state.is_typing()) {
                        self.update(message);
                    }
                }
            }
        }
        Ok(())
    }
}

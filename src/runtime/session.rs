//! Headless session: runs the update loop against pluggable collaborators
//!
//! Messages are processed one at a time from a FIFO queue. Commands returned
//! by `update` are executed immediately and any follow-up messages they
//! produce are queued. Timers are held in a deadline queue that only moves
//! when the caller advances the clock.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::catalog::DocumentSource;
use crate::commands::Cmd;
use crate::messages::{Msg, PageMsg};
use crate::model::PageModel;
use crate::surface::ViewerSurface;
use crate::update::update;

use super::clipboard::Clipboard;

#[derive(Debug)]
struct Timer {
    deadline_ms: u64,
    /// Insertion order, breaks deadline ties
    order: u64,
    msg: Msg,
}

pub struct Session<S, D, C> {
    model: PageModel,
    surface: S,
    source: D,
    clipboard: C,
    queue: VecDeque<Msg>,
    timers: Vec<Timer>,
    timer_order: u64,
    now_ms: u64,
}

impl<S, D, C> Session<S, D, C>
where
    S: ViewerSurface,
    D: DocumentSource,
    C: Clipboard,
{
    pub fn new(surface: S, source: D, clipboard: C) -> Self {
        Self {
            model: PageModel::new(),
            surface,
            source,
            clipboard,
            queue: VecDeque::new(),
            timers: Vec::new(),
            timer_order: 0,
            now_ms: 0,
        }
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Current clock, in milliseconds since the session started
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Process `msg` and everything it triggers
    pub fn dispatch(&mut self, msg: Msg) {
        self.queue.push_back(msg);
        while let Some(msg) = self.queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    /// Dispatch `msg` if there is one; returns whether anything ran
    pub fn dispatch_opt(&mut self, msg: Option<Msg>) -> bool {
        match msg {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Move the clock forward and fire every timer that is due, in order
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            tracing::debug!("Ignoring clock moving backwards: {} < {}", now_ms, self.now_ms);
            return;
        }
        self.now_ms = now_ms;

        while let Some(index) = self.next_due_timer() {
            let timer = self.timers.remove(index);
            self.dispatch(timer.msg);
        }
    }

    /// Advance the clock by `delta_ms`
    pub fn advance_by(&mut self, delta_ms: u64) {
        self.advance_to(self.now_ms.saturating_add(delta_ms));
    }

    fn next_due_timer(&self) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline_ms <= self.now_ms)
            .min_by_key(|(_, t)| (t.deadline_ms, t.order))
            .map(|(index, _)| index)
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::FetchDocument { key } => {
                let result = self
                    .source
                    .load(&key)
                    .map(Rc::new)
                    .map_err(|e| format!("{:#}", e));
                self.queue
                    .push_back(Msg::Page(PageMsg::DocumentLoaded { key, result }));
            }
            Cmd::LoadModel { src } => self.surface.load_model(&src),
            Cmd::DeclareMarkers { markers } => self.surface.declare_markers(&markers),
            Cmd::AttachListeners { binding } => self.surface.attach_listeners(binding),
            Cmd::DetachListeners { binding } => self.surface.detach_listeners(binding),
            Cmd::CopyToClipboard { text } => {
                if let Err(e) = self.clipboard.set_text(&text) {
                    tracing::warn!("Copy failed: {:#}", e);
                }
            }
            Cmd::ScheduleTimer { delay_ms, msg } => {
                self.timer_order += 1;
                self.timers.push(Timer {
                    deadline_ms: self.now_ms.saturating_add(delay_ms),
                    order: self.timer_order,
                    msg: *msg,
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Position-keyed containers and the toast lifecycle.
//!
//! The board owns every toast. Toasts sharing a [`Position`] live in one
//! [`Container`]; a container is created the first time a toast needs it and
//! dropped as soon as its last toast is detached or moved away.
//!
//! All timers are driven by [`Board::tick`], which the application calls on
//! every tick of its subscription (see [`Board::tick_interval`]).

use super::options::{Options, Update};
use super::position::Position;
use super::toast::{Toast, ToastId};
use std::time::{Duration, Instant};

/// Tick rate while a progress bar or a transition is on screen.
pub const PROGRESS_TICK: Duration = Duration::from_millis(10);

/// Tick rate while only countdowns are pending.
pub const IDLE_TICK: Duration = Duration::from_millis(100);

/// Toasts sharing one screen position, in attachment order.
#[derive(Debug)]
pub struct Container {
    position: Position,
    toasts: Vec<Toast>,
}

impl Container {
    fn new(position: Position) -> Self {
        Self {
            position,
            toasts: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Board {
    /// Containers in creation order.
    containers: Vec<Container>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toast from `options` and attaches it to the container for
    /// its position. It is revealed on the next tick.
    pub fn show(&mut self, options: Options, now: Instant) -> ToastId {
        let mut update = Update::from(options);
        let position = update.position.take().unwrap_or_default();
        let mut toast = Toast::new(position);
        let id = toast.id();
        toast.apply(update, now);

        tracing::debug!(?id, %position, "toast attached");
        self.container_or_create(position).toasts.push(toast);
        id
    }

    /// Applies a partial set of property changes. Returns `false` when the
    /// toast is unknown or already leaving.
    pub fn update(&mut self, id: ToastId, mut update: Update, now: Instant) -> bool {
        let Some(toast) = self.get_mut(id) else {
            tracing::debug!(?id, "update for unknown toast ignored");
            return false;
        };
        if toast.is_leaving() {
            tracing::debug!(?id, "update for leaving toast ignored");
            return false;
        }

        let position = update.position.take();
        toast.apply(update, now);
        if let Some(position) = position {
            self.move_to(id, position);
        }
        true
    }

    /// Starts the exit transition of a toast and runs its completion
    /// callback. The element stays attached until the transition ends.
    pub fn remove(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(toast) = self.get_mut(id) else {
            tracing::debug!(?id, "remove for unknown toast ignored");
            return false;
        };
        let started = toast.begin_leaving(now);
        if started {
            tracing::debug!(?id, "toast leaving");
        }
        started
    }

    /// Click on a toast: dismisses it when it is closable.
    pub fn click(&mut self, id: ToastId, now: Instant) -> bool {
        if !self.get(id).is_some_and(Toast::can_close) {
            return false;
        }
        self.remove(id, now)
    }

    /// Cursor entered (`true`) or left (`false`) a toast.
    pub fn hover(&mut self, id: ToastId, hovered: bool, now: Instant) -> bool {
        match self.get_mut(id) {
            Some(toast) if !toast.is_leaving() => {
                toast.set_hovered(hovered, now);
                true
            }
            _ => false,
        }
    }

    /// Starts the exit transition of every toast on the board.
    pub fn clear(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.toasts().map(Toast::id).collect();
        for id in ids {
            self.remove(id, now);
        }
    }

    /// Runs every timer up to `now`.
    ///
    /// Entering toasts are revealed, progress bars refreshed, expired
    /// auto-close timers fire, and toasts whose exit transition completed
    /// are detached. Returns the ids detached by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired = Vec::new();
        for toast in self.toasts_mut() {
            toast.advance(now);
            if toast.is_expired(now) {
                expired.push(toast.id());
            }
        }
        for id in expired {
            tracing::debug!(?id, "auto-close timer fired");
            self.remove(id, now);
        }

        let mut detached = Vec::new();
        for container in &mut self.containers {
            container.toasts.retain(|toast| {
                let finished = toast.is_transition_finished(now);
                if finished {
                    detached.push(toast.id());
                }
                !finished
            });
        }
        self.drop_empty_containers();
        detached
    }

    /// How often [`Board::tick`] needs to run, `None` when nothing is pending.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        let needs_frames = self.toasts().any(|toast| {
            toast.is_animating() || (toast.show_progress() && toast.countdown().is_some())
        });
        Some(if needs_frames { PROGRESS_TICK } else { IDLE_TICK })
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    #[must_use]
    pub fn container(&self, position: Position) -> Option<&Container> {
        self.containers
            .iter()
            .find(|container| container.position == position)
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.containers
            .iter()
            .flat_map(|container| container.toasts.iter())
    }

    /// Number of attached toasts, leaving ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts_mut().find(|toast| toast.id() == id)
    }

    fn toasts_mut(&mut self) -> impl Iterator<Item = &mut Toast> {
        self.containers
            .iter_mut()
            .flat_map(|container| container.toasts.iter_mut())
    }

    fn container_or_create(&mut self, position: Position) -> &mut Container {
        let index = match self
            .containers
            .iter()
            .position(|container| container.position == position)
        {
            Some(index) => index,
            None => {
                tracing::debug!(%position, "container created");
                self.containers.push(Container::new(position));
                self.containers.len() - 1
            }
        };
        &mut self.containers[index]
    }

    /// Moves a toast to the end of the container for `position`, which may
    /// be the container it already lives in.
    fn move_to(&mut self, id: ToastId, position: Position) {
        let Some((container_index, toast_index)) = self.locate(id) else {
            return;
        };

        let current = &mut self.containers[container_index];
        let mut toast = current.toasts.remove(toast_index);
        if current.position == position {
            current.toasts.push(toast);
            return;
        }

        toast.set_position(position);
        tracing::debug!(?id, %position, "toast moved");

        self.drop_empty_containers();
        self.container_or_create(position).toasts.push(toast);
    }

    fn locate(&self, id: ToastId) -> Option<(usize, usize)> {
        self.containers
            .iter()
            .enumerate()
            .find_map(|(container_index, container)| {
                container
                    .toasts
                    .iter()
                    .position(|toast| toast.id() == id)
                    .map(|toast_index| (container_index, toast_index))
            })
    }

    fn drop_empty_containers(&mut self) {
        self.containers.retain(|container| {
            if container.is_empty() {
                tracing::debug!(position = %container.position, "container removed");
            }
            !container.is_empty()
        });
    }
}

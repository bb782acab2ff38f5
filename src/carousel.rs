//! Auto-advancing image carousel.
//!
//! The markup is a slide track (`#carouselSlides`) whose children are the
//! slides, plus one `.dot` indicator per slide:
//!
//! ```text
//! div#carouselSlides   style="transform: translateX(-100%)"
//! ├── slide 0
//! ├── slide 1          ← current
//! └── slide 2
//! span.dot  span.dot.active  span.dot
//! ```
//!
//! ## Behavior
//!
//! - Showing slide `i` translates the track by `-i * 100%` and marks dot `i`
//!   active, clearing every other dot.
//! - Indices wrap: below zero goes to the last slide, past the end goes to the
//!   first.
//! - Autoplay advances one slide per interval. Starting autoplay always
//!   cancels the running timer first, so at most one is ever pending.
//! - Clicking a dot shows its slide and restarts autoplay from zero.
//! - Pointer over the track pauses autoplay; leaving resumes it.
//!
//! A page without a slide track (or with an empty one) has no carousel; mounting
//! simply returns `None`.

use crate::dom::{Document, EventKind, NodeId, Registration};
use crate::timer::{TimerHandle, Timers};
use std::time::Duration;
use tracing::debug;

pub const SLIDES_ID: &str = "carouselSlides";
pub const DOT_CLASS: &str = "dot";
pub const ACTIVE_CLASS: &str = "active";
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// Events the carousel listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    DotClicked(usize),
    PointerEnter,
    PointerLeave,
    /// The autoplay timer fired.
    Tick,
}

/// CSS transform that shows slide `index`.
pub fn track_transform(index: usize) -> String {
    format!("translateX({}%)", -(index as i64) * 100)
}

#[derive(Debug)]
pub struct Carousel {
    track: NodeId,
    dots: Vec<NodeId>,
    slide_count: usize,
    current: usize,
    interval: Duration,
    autoplay: Option<TimerHandle>,
    dot_listeners: Vec<Registration>,
    enter_listener: Registration,
    leave_listener: Registration,
}

impl Carousel {
    /// Wire up the carousel on `doc`: listeners, slide 0, autoplay.
    ///
    /// `interval` is the default autoplay period, also used when resuming
    /// after hover and after a dot click.
    pub fn mount<M, T>(doc: &mut Document<M>, timers: &mut T, interval: Duration) -> Option<Self>
    where
        M: Clone + From<CarouselMessage>,
        T: Timers,
    {
        let Some(track) = doc.get_element_by_id(SLIDES_ID) else {
            debug!("no #{SLIDES_ID} on this page, carousel skipped");
            return None;
        };
        let slide_count = doc.element(track).map_or(0, |e| e.children().len());
        if slide_count == 0 {
            debug!("#{SLIDES_ID} has no slides, carousel skipped");
            return None;
        }

        let dots = doc.get_elements_by_class_name(DOT_CLASS);
        let mut carousel = Self {
            track,
            dots,
            slide_count,
            current: 0,
            interval,
            autoplay: None,
            dot_listeners: Vec::new(),
            enter_listener: Registration::new(),
            leave_listener: Registration::new(),
        };
        carousel.attach(doc);
        carousel.go_to_slide(doc, 0);
        carousel.start_autoplay(timers, interval);
        debug!(slides = slide_count, dots = carousel.dots.len(), "carousel mounted");
        Some(carousel)
    }

    fn attach<M: Clone + From<CarouselMessage>>(&mut self, doc: &mut Document<M>) {
        self.dot_listeners.resize_with(self.dots.len(), Registration::new);
        for (index, (dot, reg)) in self.dots.iter().zip(&mut self.dot_listeners).enumerate() {
            reg.attach(doc, *dot, EventKind::Click, CarouselMessage::DotClicked(index).into());
        }
        self.enter_listener.attach(
            doc,
            self.track,
            EventKind::PointerEnter,
            CarouselMessage::PointerEnter.into(),
        );
        self.leave_listener.attach(
            doc,
            self.track,
            EventKind::PointerLeave,
            CarouselMessage::PointerLeave.into(),
        );
    }

    /// Stop autoplay and remove every listener this carousel attached.
    pub fn unmount<M: Clone, T: Timers>(mut self, doc: &mut Document<M>, timers: &mut T) {
        self.stop_autoplay(timers);
        for reg in &mut self.dot_listeners {
            reg.detach(doc);
        }
        self.enter_listener.detach(doc);
        self.leave_listener.detach(doc);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn autoplay_timer(&self) -> Option<TimerHandle> {
        self.autoplay
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Show slide `index`, wrapping out-of-range values to the nearest end.
    pub fn go_to_slide<M: Clone>(&mut self, doc: &mut Document<M>, index: isize) {
        let index = if index < 0 {
            self.slide_count - 1
        } else if index as usize >= self.slide_count {
            0
        } else {
            index as usize
        };
        self.current = index;

        let Some(track) = doc.element_mut(self.track) else {
            return;
        };
        track.transform = Some(track_transform(index));
        for (i, dot) in self.dots.iter().enumerate() {
            if let Some(dot) = doc.element_mut(*dot) {
                dot.toggle_class(ACTIVE_CLASS, i == index);
            }
        }
    }

    pub fn next_slide<M: Clone>(&mut self, doc: &mut Document<M>) {
        self.go_to_slide(doc, self.current as isize + 1);
    }

    pub fn start_autoplay<T: Timers>(&mut self, timers: &mut T, interval: Duration) {
        self.stop_autoplay(timers);
        self.autoplay = Some(timers.set_interval(interval));
    }

    pub fn stop_autoplay<T: Timers>(&mut self, timers: &mut T) {
        if let Some(handle) = self.autoplay.take() {
            timers.clear_interval(handle);
        }
    }

    pub fn update<M: Clone, T: Timers>(
        &mut self,
        message: CarouselMessage,
        doc: &mut Document<M>,
        timers: &mut T,
    ) {
        match message {
            CarouselMessage::DotClicked(index) => {
                self.go_to_slide(doc, index as isize);
                self.start_autoplay(timers, self.interval);
            }
            CarouselMessage::PointerEnter => self.stop_autoplay(timers),
            CarouselMessage::PointerLeave => self.start_autoplay(timers, self.interval),
            CarouselMessage::Tick => self.next_slide(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::timer::VirtualTimers;

    fn deck(slides: usize) -> Document<CarouselMessage> {
        let mut doc = Document::new();
        let track = doc.append(Element::new().with_id(SLIDES_ID));
        for _ in 0..slides {
            doc.append_child(track, Element::new().with_class("slide"));
        }
        for _ in 0..slides {
            doc.append(Element::new().with_class(DOT_CLASS));
        }
        doc
    }

    fn active_dots(doc: &Document<CarouselMessage>) -> Vec<usize> {
        doc.get_elements_by_class_name(DOT_CLASS)
            .into_iter()
            .enumerate()
            .filter(|(_, dot)| doc.element(*dot).unwrap().has_class(ACTIVE_CLASS))
            .map(|(i, _)| i)
            .collect()
    }

    fn transform(doc: &Document<CarouselMessage>) -> String {
        let track = doc.get_element_by_id(SLIDES_ID).unwrap();
        doc.element(track).unwrap().transform.clone().unwrap()
    }

    fn mounted(slides: usize) -> (Document<CarouselMessage>, VirtualTimers, Carousel) {
        let mut doc = deck(slides);
        let mut timers = VirtualTimers::new();
        let carousel = Carousel::mount(&mut doc, &mut timers, DEFAULT_INTERVAL).unwrap();
        (doc, timers, carousel)
    }

    #[test]
    fn mount_shows_first_slide_and_starts_autoplay() {
        let (doc, timers, carousel) = mounted(4);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(transform(&doc), "translateX(0%)");
        assert_eq!(active_dots(&doc), vec![0]);
        assert!(carousel.is_playing());
        assert_eq!(timers.active(), 1);
    }

    #[test]
    fn mount_without_track_is_silent() {
        let mut doc: Document<CarouselMessage> = Document::new();
        doc.append(Element::new().with_class(DOT_CLASS));
        let mut timers = VirtualTimers::new();
        assert!(Carousel::mount(&mut doc, &mut timers, DEFAULT_INTERVAL).is_none());
        assert_eq!(timers.active(), 0);
    }

    #[test]
    fn mount_with_empty_track_is_silent() {
        let mut doc = deck(0);
        let mut timers = VirtualTimers::new();
        assert!(Carousel::mount(&mut doc, &mut timers, DEFAULT_INTERVAL).is_none());
    }

    #[test]
    fn go_to_negative_wraps_to_last() {
        let (mut doc, _, mut carousel) = mounted(5);
        carousel.go_to_slide(&mut doc, -1);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(transform(&doc), "translateX(-400%)");
        assert_eq!(active_dots(&doc), vec![4]);
    }

    #[test]
    fn go_past_end_wraps_to_first() {
        let (mut doc, _, mut carousel) = mounted(5);
        carousel.go_to_slide(&mut doc, 3);
        carousel.go_to_slide(&mut doc, 5);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(active_dots(&doc), vec![0]);
    }

    #[test]
    fn far_out_of_range_goes_to_nearest_end() {
        let (mut doc, _, mut carousel) = mounted(3);
        carousel.go_to_slide(&mut doc, -7);
        assert_eq!(carousel.current_index(), 2);
        carousel.go_to_slide(&mut doc, 42);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn exactly_one_dot_active_after_every_move() {
        let (mut doc, _, mut carousel) = mounted(4);
        for index in -2..8 {
            carousel.go_to_slide(&mut doc, index);
            assert!(carousel.current_index() < 4);
            assert_eq!(active_dots(&doc), vec![carousel.current_index()]);
        }
    }

    #[test]
    fn next_slide_cycles() {
        let (mut doc, _, mut carousel) = mounted(3);
        let seen: Vec<usize> = (0..4)
            .map(|_| {
                carousel.next_slide(&mut doc);
                carousel.current_index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn starting_twice_leaves_one_timer() {
        let (_, mut timers, mut carousel) = mounted(3);
        carousel.start_autoplay(&mut timers, DEFAULT_INTERVAL);
        carousel.start_autoplay(&mut timers, DEFAULT_INTERVAL);
        assert_eq!(timers.active(), 1);
        assert_eq!(timers.advance(DEFAULT_INTERVAL).len(), 1);
    }

    #[test]
    fn stop_without_timer_is_safe() {
        let (_, mut timers, mut carousel) = mounted(3);
        carousel.stop_autoplay(&mut timers);
        carousel.stop_autoplay(&mut timers);
        assert!(!carousel.is_playing());
        assert_eq!(timers.active(), 0);
    }

    #[test]
    fn tick_advances_slide() {
        let (mut doc, mut timers, mut carousel) = mounted(3);
        carousel.update(CarouselMessage::Tick, &mut doc, &mut timers);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(transform(&doc), "translateX(-100%)");
    }

    #[test]
    fn dot_click_restarts_autoplay() {
        let (mut doc, mut timers, mut carousel) = mounted(4);
        let before = carousel.autoplay_timer();
        timers.advance(Duration::from_millis(2000));
        carousel.update(CarouselMessage::DotClicked(2), &mut doc, &mut timers);
        assert_eq!(carousel.current_index(), 2);
        assert_ne!(carousel.autoplay_timer(), before);
        assert_eq!(timers.active(), 1);
        // A full interval from the click, not from mount.
        assert!(timers.advance(Duration::from_millis(2999)).is_empty());
        assert_eq!(timers.advance(Duration::from_millis(1)).len(), 1);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let (mut doc, mut timers, mut carousel) = mounted(3);
        carousel.update(CarouselMessage::PointerEnter, &mut doc, &mut timers);
        assert!(!carousel.is_playing());
        assert_eq!(timers.active(), 0);
        carousel.update(CarouselMessage::PointerLeave, &mut doc, &mut timers);
        assert!(carousel.is_playing());
        assert_eq!(timers.active(), 1);
    }

    #[test]
    fn listeners_are_wired_to_dots_and_track() {
        let (doc, _, _) = mounted(3);
        let dots = doc.get_elements_by_class_name(DOT_CLASS);
        assert_eq!(
            doc.listeners_for(dots[1], EventKind::Click),
            vec![CarouselMessage::DotClicked(1)]
        );
        let track = doc.get_element_by_id(SLIDES_ID).unwrap();
        assert_eq!(
            doc.listeners_for(track, EventKind::PointerEnter),
            vec![CarouselMessage::PointerEnter]
        );
    }

    #[test]
    fn unmount_cancels_timer_and_listeners() {
        let (mut doc, mut timers, carousel) = mounted(3);
        carousel.unmount(&mut doc, &mut timers);
        assert_eq!(timers.active(), 0);
        let track = doc.get_element_by_id(SLIDES_ID).unwrap();
        assert_eq!(doc.listener_count(track, EventKind::PointerLeave), 0);
    }

    #[test]
    fn track_transform_format() {
        assert_eq!(track_transform(0), "translateX(0%)");
        assert_eq!(track_transform(2), "translateX(-200%)");
    }
}

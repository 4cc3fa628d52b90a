use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "The whole team made my kids feel at ease from the moment we walked in. \
         Booking online took less than a minute.",
        "Sarah Mitchell",
        "Parent of two",
    ),
    (
        "I have been coming here for my annual check-ups for five years. \
         Always on time, always thorough.",
        "David Okafor",
        "Patient since 2021",
    ),
    (
        "After my knee surgery the physiotherapy program here got me back to \
         running within months.",
        "Elena Vasquez",
        "Physiotherapy patient",
    ),
    (
        "Friendly staff and a doctor who actually listens. I recommend Bayview \
         to everyone in the neighborhood.",
        "Tom Lindqvist",
        "Local resident",
    ),
];

/// Carousel position, kept as one explicit state object instead of a
/// module-level index. Stepping wraps; selecting out of range is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    Select(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::Select(index) => next.select(index),
        }
        Rc::new(next)
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    // Auto-rotate; dropping the interval on unmount stops it.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CAROUSEL_PERIOD_MS, move || {
                    carousel.dispatch(CarouselAction::Next);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let active = carousel.index();

    html! {
        <section id="testimonials" class="testimonials-section">
            <style>
                {r#"
                    .testimonials-section {
                        padding: 4rem 1rem;
                        text-align: center;
                        background: #f5f9fc;
                    }
                    .testimonial-track {
                        position: relative;
                        max-width: 640px;
                        margin: 0 auto;
                        min-height: 180px;
                    }
                    .testimonial-slide {
                        display: none;
                    }
                    .testimonial-slide.active {
                        display: block;
                        animation: fadeIn 0.5s ease;
                    }
                    .testimonial-quote {
                        font-size: 1.1rem;
                        font-style: italic;
                        color: #333;
                    }
                    .testimonial-author {
                        margin-top: 1rem;
                        font-weight: bold;
                        color: #0077be;
                    }
                    .testimonial-role {
                        font-size: 0.9rem;
                        color: #777;
                    }
                    .carousel-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .carousel-arrow {
                        background: none;
                        border: 1px solid #0077be;
                        color: #0077be;
                        border-radius: 50%;
                        width: 36px;
                        height: 36px;
                        cursor: pointer;
                    }
                    .dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        background: #c5d8e8;
                        cursor: pointer;
                        padding: 0;
                    }
                    .dot.active { background: #0077be; }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <h2>{"What Our Patients Say"}</h2>
            <div class="testimonial-track">
                {
                    TESTIMONIALS.iter().enumerate().map(|(i, (quote, author, role))| {
                        let class = if i == active {
                            "testimonial-slide active"
                        } else {
                            "testimonial-slide"
                        };
                        html! {
                            <div {class}>
                                <p class="testimonial-quote">{ format!("\u{201c}{quote}\u{201d}") }</p>
                                <div class="testimonial-author">{ *author }</div>
                                <div class="testimonial-role">{ *role }</div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" aria-label="Previous testimonial" onclick={on_prev}>
                    {"‹"}
                </button>
                {
                    (0..TESTIMONIALS.len()).map(|i| {
                        let class = if i == active { "dot active" } else { "dot" };
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| {
                                carousel.dispatch(CarouselAction::Select(i));
                            })
                        };
                        html! {
                            <button {class} aria-label={format!("Show testimonial {}", i + 1)} {onclick} />
                        }
                    }).collect::<Html>()
                }
                <button class="carousel-arrow" aria-label="Next testimonial" onclick={on_next}>
                    {"›"}
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_forward() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.prev();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn select_is_bounds_checked() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        assert_eq!(carousel.index(), 2);
        carousel.select(7);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_never_steps() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }
}

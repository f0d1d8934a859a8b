use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};
use yew::prelude::*;

use super::controller::{Scheduler, SlideKey, SliderController, SliderMsg, SliderTiming};
use super::dom::strip_reveal_annotations;
use crate::config;

#[derive(Clone, PartialEq)]
pub struct HeroSlide {
    pub background: AttrValue,
    pub content: Html,
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<HeroSlide>,
    #[prop_or(true)]
    pub show_indicators: bool,
}

pub enum HeroSliderMsg {
    Initialize,
    Slider(SliderMsg),
}

/// Runs slider timers on the browser event loop and posts their messages
/// back into the component.
pub struct LinkScheduler {
    sink: Callback<SliderMsg>,
}

impl Scheduler for LinkScheduler {
    type Handle = Interval;

    fn repeat(&self, period_ms: u32, msg: SliderMsg) -> Interval {
        let sink = self.sink.clone();
        Interval::new(period_ms, move || sink.emit(msg))
    }

    fn defer(&self, delay_ms: u32, msg: SliderMsg) {
        let sink = self.sink.clone();
        Timeout::new(delay_ms, move || sink.emit(msg)).forget();
    }
}

pub struct HeroSlider {
    container: NodeRef,
    controller: SliderController<LinkScheduler>,
    keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    start: Option<Timeout>,
}

impl Component for HeroSlider {
    type Message = HeroSliderMsg;
    type Properties = HeroSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = LinkScheduler {
            sink: ctx.link().callback(HeroSliderMsg::Slider),
        };

        // Give the reveal library a moment so it doesn't interfere
        let link = ctx.link().clone();
        let start = Timeout::new(config::SLIDER_START_DELAY_MS, move || {
            link.send_message(HeroSliderMsg::Initialize);
        });

        Self {
            container: NodeRef::default(),
            controller: SliderController::new(scheduler, SliderTiming::default()),
            keydown: None,
            start: Some(start),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HeroSliderMsg::Initialize => {
                self.start = None;
                let props = ctx.props();

                if let Some(container) = self.container.cast::<Element>() {
                    let stripped = strip_reveal_annotations(&container);
                    debug!("hero slider: stripped reveal annotations from {} elements", stripped);
                }

                let indicators = if props.show_indicators { props.slides.len() } else { 0 };
                if !self.controller.initialize(props.slides.len(), indicators) {
                    return false;
                }
                self.listen_keyboard(ctx);
                info!("Hero slider started with {} slides", self.controller.slide_count());
                debug!("hero slider state: {:?}", self.controller.state());
                true
            }
            HeroSliderMsg::Slider(msg) => self.controller.handle(msg),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_enter = ctx
            .link()
            .callback(|_: MouseEvent| HeroSliderMsg::Slider(SliderMsg::PointerEnter));
        let on_leave = ctx
            .link()
            .callback(|_: MouseEvent| HeroSliderMsg::Slider(SliderMsg::PointerLeave));

        html! {
            <div class="slider-container"
                ref={self.container.clone()}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                    <div
                        class={classes!("hero-slide", self.controller.slide_mark(index).class())}
                        aria-hidden={(self.controller.current_index() != Some(index)).to_string()}
                        style={format!("background-image: url('{}');", slide.background)}
                    >
                        <div class="hero-overlay"></div>
                        <div class="hero-content">
                            { slide.content.clone() }
                        </div>
                    </div>
                }) }
                if props.show_indicators && !props.slides.is_empty() {
                    <div class="slider-dots">
                        { for (0..self.controller.indicator_count()).map(|index| self.render_dot(ctx, index)) }
                    </div>
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(closure) = self.keydown.take() {
            if let Some(document) = window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
        self.controller.pause_auto();
    }
}

impl HeroSlider {
    fn render_dot(&self, ctx: &Context<Self>, index: usize) -> Html {
        let onclick = ctx
            .link()
            .callback(move |_: MouseEvent| HeroSliderMsg::Slider(SliderMsg::Indicator(index)));
        html! {
            <span
                class={classes!("dot", self.controller.indicator_active(index).then(|| "active"))}
                {onclick}
            ></span>
        }
    }

    // Listens on the whole document, not just the slider, so arrow keys work
    // anywhere on the page.
    fn listen_keyboard(&mut self, ctx: &Context<Self>) {
        if self.keydown.is_some() {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        let sink = ctx.link().callback(HeroSliderMsg::Slider);
        let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if let Some(key) = SlideKey::from_key(&e.key()) {
                sink.emit(SliderMsg::Key(key));
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.keydown = Some(closure);
        }
    }
}

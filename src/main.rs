//! Main module for the property configuration picker using Yew.
//! Wires UI components, the selection state machine, and its
//! side-effect collaborators (URL sync, debounced analytics).

use log::warn;
use property_config::analytics::DataLayerSink;
use property_config::config::DEBOUNCE_MS;
use property_config::controller::Configurator;
use property_config::emitter::BrowserScheduler;
use property_config::url_sync::BrowserHistory;
use property_config::{spec_for, Category};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod components;

use components::{render_current_values, CategoryButtons, SliderRow};

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let configurator = use_mut_ref(|| {
        Configurator::new(
            Rc::new(BrowserHistory),
            Rc::new(DataLayerSink),
            BrowserScheduler,
            DEBOUNCE_MS,
        )
    });
    // Bumped on every accepted mutation so the view re-renders against
    // the latest snapshot
    let version = use_state(|| 0usize);

    // Cancel any armed emission when the component unmounts
    {
        let configurator = configurator.clone();
        use_effect_with((), move |_| {
            move || configurator.borrow().cancel_pending()
        });
    }

    let switch_category = {
        let configurator = configurator.clone();
        let version = version.clone();
        Callback::from(move |category: Category| {
            configurator.borrow().switch_category(category);
            version.set(version.wrapping_add(1));
        })
    };

    let on_select_change = {
        let switch_category = switch_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match Category::parse(&select.value()) {
                Ok(category) => switch_category.emit(category),
                Err(e) => warn!("rejected category input: {}", e),
            }
        })
    };

    let snapshot = configurator.borrow().snapshot();
    let selected = snapshot.category;

    html! {
        <div class="container">
            <h1>{ "Property Configuration" }</h1>

            <form class="config-form">
                <div class="form-group">
                    <label for="option-select">{ "Property Type:" }</label>
                    <select id="option-select" class="dropdown" onchange={on_select_change}>
                        { Category::ALL.iter().map(|&category| html! {
                            <option value={category.as_str()}
                                selected={category == selected}>
                                { category.display_name() }
                            </option>
                        }).collect::<Html>() }
                    </select>
                </div>

                <div class="form-group">
                    <label>{ "Quick Select:" }</label>
                    <CategoryButtons selected={selected} onselect={switch_category.clone()} />
                </div>

                <div class="sliders-container">
                    { snapshot.sliders.iter().map(|reading| {
                        let slider = reading.id;
                        let oninput = {
                            let configurator = configurator.clone();
                            let version = version.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                if let Ok(value) = input.value().parse::<u32>() {
                                    match configurator.borrow().update_slider(slider, value) {
                                        Ok(()) => version.set(version.wrapping_add(1)),
                                        Err(e) => warn!("rejected slider input: {}", e),
                                    }
                                }
                            })
                        };
                        html! {
                            <SliderRow slider={slider}
                                spec={spec_for(selected, slider)}
                                value={reading.value}
                                oninput={oninput}
                            />
                        }
                    }).collect::<Html>() }
                </div>

                { render_current_values(&snapshot) }
            </form>
        </div>
    }
}

/// App wrapper kept separate so context providers can be layered
/// around `Main` without touching it.
#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

//! Pure Yew view components for the property configuration form.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use property_config::{Category, SliderId, SliderSpec, Snapshot};
use yew::prelude::*;

/// Quick-select button row for the property categories.
#[derive(Properties, PartialEq)]
pub struct CategoryButtonsProps {
    pub selected: Category,
    pub onselect: Callback<Category>,
}

#[function_component(CategoryButtons)]
pub fn category_buttons(props: &CategoryButtonsProps) -> Html {
    html! {
        <div class="button-group">
            { Category::ALL.iter().map(|&category| {
                let onselect = props.onselect.clone();
                let class = if category == props.selected {
                    "project-type-button active"
                } else {
                    "project-type-button"
                };
                html! {
                    <button type="button"
                        name={category.as_str()}
                        class={class}
                        onclick={Callback::from(move |_| onselect.emit(category))}>
                        { category.display_name() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// One labeled range input with its min/max legend.
#[derive(Properties, PartialEq)]
pub struct SliderRowProps {
    pub slider: SliderId,
    pub spec: SliderSpec,
    pub value: u32,
    pub oninput: Callback<InputEvent>,
}

#[function_component(SliderRow)]
pub fn slider_row(props: &SliderRowProps) -> Html {
    let spec = props.spec;
    html! {
        <div class="slider-group">
            <label for={props.slider.as_str()}>
                { format!("{}: {}", spec.label, props.value) }
            </label>
            <input type="range"
                id={props.slider.as_str()}
                min={spec.min.to_string()}
                max={spec.max.to_string()}
                step={spec.step.to_string()}
                value={props.value.to_string()}
                class="slider"
                oninput={props.oninput.clone()}
            />
            <div class="slider-range">
                <span>{ spec.min }</span>
                <span>{ spec.max }</span>
            </div>
        </div>
    }
}

/// Summary panel showing the active category, its URL path, and each
/// slider's label and value.
pub fn render_current_values(snapshot: &Snapshot) -> Html {
    html! {
        <div class="current-values">
            <h3>{ format!("Current Selection: {}", snapshot.category) }</h3>
            <p>{ format!("URL: /{}", snapshot.category) }</p>
            <div class="values">
                { snapshot.sliders.iter().map(|reading| html! {
                    <div>{ format!("{}: {}", reading.label, reading.value) }</div>
                }).collect::<Html>() }
            </div>
        </div>
    }
}

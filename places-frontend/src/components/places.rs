use leptos::*;

use places_core::entities::Place;

#[component]
pub fn Places(
    title: &'static str,
    #[prop(into)] places: Signal<Vec<Place>>,
    #[prop(into)] is_loading: Signal<bool>,
    loading_text: &'static str,
    fallback_text: &'static str,
    #[prop(into)] on_select_place: Callback<String>,
) -> impl IntoView {
    view! {
      <section class="places-category">
        <h2>{ title }</h2>
        { move || {
            if is_loading.get() {
              view! { <p class="fallback-text">{ loading_text }</p> }.into_view()
            } else if places.with(Vec::is_empty) {
              view! { <p class="fallback-text">{ fallback_text }</p> }.into_view()
            } else {
              view! {
                <ul class="places">
                  <For
                    each=move || places.get()
                    key=|place| place.id.clone()
                    let:place
                  >
                    <li class="place-item">
                      <PlaceItem place on_select_place />
                    </li>
                  </For>
                </ul>
              }.into_view()
            }
          }
        }
      </section>
    }
}

#[component]
fn PlaceItem(place: Place, on_select_place: Callback<String>) -> impl IntoView {
    let Place { id, name, image, .. } = place;
    view! {
      <button on:click = move |_| on_select_place.call(id.clone())>
        <img src={ image.src } alt={ image.alt } />
        <h3>{ name }</h3>
      </button>
    }
}

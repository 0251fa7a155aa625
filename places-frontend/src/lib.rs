use leptos::*;

use places_core::PickedPlaces;
use places_frontend_api::PublicApi;

pub mod config;
pub mod gateways;
pub mod geolocation;

mod components;
use components::*;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let picked_places = RwSignal::new(PickedPlaces::default());
    let picked_ids = Signal::derive(move || picked_places.with(|p| p.ids().to_vec()));

    // -- callbacks -- //

    let on_select_place = Callback::new(move |id: String| {
        picked_places.update(|p| {
            p.select(id);
        });
    });

    let on_remove_place = move |id: String| {
        picked_places.update(|p| {
            if !p.deselect(&id) {
                log::warn!("Place {id} has not been picked");
            }
        });
    };

    // -- init API -- //

    let public_api = PublicApi::new(config::api_url());
    log::debug!("Fetch places from {}", public_api.url());
    provide_context(public_api);

    view! {
      <header>
        <h1>"PlacePicker"</h1>
        <p>"Create your personal collection of places you would like to visit."</p>
      </header>
      <main>
        <section class="places-category">
          <h2>"I'd like to visit ..."</h2>
          <Show
            when = move || !picked_ids.with(Vec::is_empty)
            fallback = || view! { <p class="fallback-text">"Select the places you would like to visit below."</p> }
          >
            <ul class="picked-places">
              <For
                each = move || picked_ids.get()
                key = |id| id.clone()
                let:id
              >
                <li>
                  { id.clone() }
                  <button on:click = move |_| on_remove_place(id.clone())>"Remove"</button>
                </li>
              </For>
            </ul>
          </Show>
        </section>
        <AvailablePlaces on_select_place />
      </main>
    }
}

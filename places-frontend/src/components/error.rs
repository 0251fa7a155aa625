use leptos::*;

#[component]
pub fn ErrorPage(title: &'static str, #[prop(into)] message: String) -> impl IntoView {
    view! {
      <div class="error">
        <h2>{ title }</h2>
        <p>{ message }</p>
      </div>
    }
}

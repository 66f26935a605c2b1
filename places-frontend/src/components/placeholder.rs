use leptos::*;

#[component]
pub fn Placeholder() -> impl IntoView {
    view! {
      <p class="py-12 text-center text-gray-500">"Find coffee shops near me"</p>
    }
}

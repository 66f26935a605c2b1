use leptos::*;

/// Embedded map that is not loaded before it is scrolled into view.
#[component]
pub fn ResultMap(src: String, title: String) -> impl IntoView {
    view! {
      <iframe
        class="w-full h-full border-0"
        src=src
        title=title
        loading="lazy"
        allowfullscreen=true
        referrerpolicy="no-referrer-when-downgrade"
      ></iframe>
    }
}

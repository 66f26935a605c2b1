use leptos::*;

use places_frontend_api::Notice;

/// Inline status region
#[component]
pub fn StatusNotice(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = match notice {
                Notice::EmptyQuery => "bg-yellow-50 text-yellow-800",
                Notice::RequestFailed(_) => "bg-red-50 text-red-700",
            };
            view! {
              <div role="status" class=format!("flex justify-between mb-4 p-3 rounded {class}")>
                <p>{ notice.to_string() }</p>
                <button
                  type="button"
                  aria-label="Dismiss"
                  on:click = move |_| on_dismiss.call(())
                >
                  "×"
                </button>
              </div>
            }
        })
    }
}

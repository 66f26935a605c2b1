use leptos::*;

use places_frontend_api::{MapEmbed, ResultCard};

use super::ResultMap;

#[component]
pub fn PlaceCard(card: ResultCard) -> impl IntoView {
    let ResultCard {
        name,
        address,
        map,
        directions_url,
    } = card;
    let map = match map {
        Some(MapEmbed { src, title }) => view! { <ResultMap src title /> }.into_view(),
        None => view! {
          <div class="flex items-center justify-center h-full text-gray-400">
            "map unavailable"
          </div>
        }
        .into_view(),
    };
    view! {
      <article class="p-4 bg-white rounded shadow">
        <h2 class="font-bold text-lg">{ name }</h2>
        <p class="text-gray-600 mb-2">{ address }</p>
        <div class="h-64 mb-2 bg-gray-100">{ map }</div>
        <a
          class="text-blue-600 hover:underline"
          href=directions_url
          target="_blank"
          rel="noreferrer"
        >
          "Directions"
        </a>
      </article>
    }
}

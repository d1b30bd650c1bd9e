//! Search input above the canvas.

use leptos::prelude::*;

/// Text input reporting every edit to its owner.
///
/// The bar holds no state of its own: it shows `value` and hands each new
/// string to `on_change`.
#[component]
pub fn SearchBar(
	#[prop(into)] value: Signal<String>,
	#[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
	view! {
		<div class="search-bar">
			<span class="search-icon" aria-hidden="true">"⌕"</span>
			<input
				type="text"
				class="search-input"
				placeholder="Search nodes, IPs, OS, or locations..."
				prop:value=move || value.get()
				on:input=move |ev| on_change.run(event_target_value(&ev))
			/>
		</div>
	}
}

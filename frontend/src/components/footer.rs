//! Static footer.

use crate::components::icons::{AlertTriangle, Phone};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-neutral text-neutral-content mt-auto">
            <div class="max-w-7xl mx-auto px-4 py-10 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="space-y-2">
                    <div class="flex items-center gap-2 text-lg font-bold">
                        <span class="h-6 w-6 text-error"><AlertTriangle /></span>
                        "Ajali!"
                    </div>
                    <p class="text-sm opacity-70">
                        "Citizen incident reporting for Kenya. See something, report it - "
                        "every report helps responders act faster."
                    </p>
                </div>
                <div class="space-y-2">
                    <h3 class="font-semibold">"Quick Links"</h3>
                    <ul class="text-sm opacity-70 space-y-1">
                        <li><a href="/" class="hover:opacity-100">"Home"</a></li>
                        <li><a href="/dashboard" class="hover:opacity-100">"Dashboard"</a></li>
                        <li><a href="/register" class="hover:opacity-100">"Get Started"</a></li>
                    </ul>
                </div>
                <div class="space-y-2">
                    <h3 class="font-semibold">"Emergency Contacts"</h3>
                    <ul class="text-sm opacity-70 space-y-1">
                        <li class="flex items-center gap-2">
                            <span class="h-4 w-4"><Phone /></span>
                            "Police: 999"
                        </li>
                        <li class="flex items-center gap-2">
                            <span class="h-4 w-4"><Phone /></span>
                            "Ambulance: 112"
                        </li>
                    </ul>
                </div>
            </div>
            <div class="border-t border-neutral-content/20 py-4 text-center text-sm opacity-60">
                "Ajali! - report incidents, save lives."
            </div>
        </footer>
    }
}

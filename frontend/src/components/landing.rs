//! Marketing landing page.

use crate::components::icons::{AlertTriangle, Bell, CheckCircle, MapPin, Shield, Users};
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="bg-base-200">
            // Hero
            <div class="hero py-24 bg-base-100">
                <div class="hero-content text-center">
                    <div class="max-w-3xl">
                        <h1 class="text-5xl font-extrabold tracking-tight">
                            "Report Incidents" <br />
                            <span class="text-error">"Save Lives"</span>
                        </h1>
                        <p class="py-6 text-base-content/70 text-lg">
                            "Ajali! enables citizens to report accidents and emergencies "
                            "in real-time, connecting them directly with first responders "
                            "and authorities."
                        </p>
                        <div class="flex justify-center gap-4">
                            <Link to="/register">
                                <span class="btn btn-error text-white px-8">"Get Started"</span>
                            </Link>
                            <Link to="/login">
                                <span class="btn btn-outline btn-error px-8">"Sign In"</span>
                            </Link>
                        </div>
                    </div>
                </div>
            </div>

            // Features
            <div class="py-16">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-extrabold">"Why Choose Ajali!"</h2>
                        <p class="mt-4 text-base-content/70">
                            "Our platform is designed to make emergency reporting quick, easy, and effective."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                        <FeatureCell
                            title="Quick Reporting"
                            body="Report incidents quickly and easily with our intuitive interface."
                        >
                            <AlertTriangle />
                        </FeatureCell>
                        <FeatureCell
                            title="Precise Location"
                            body="Pin the exact location of an incident on the map."
                        >
                            <MapPin />
                        </FeatureCell>
                        <FeatureCell
                            title="Status Updates"
                            body="Follow your report from investigation to resolution."
                        >
                            <Bell />
                        </FeatureCell>
                    </div>
                </div>
            </div>

            // How it works
            <div class="py-16 bg-base-100">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-extrabold">"How It Works"</h2>
                    </div>
                    <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                        <FeatureCell
                            title="1. Create an account"
                            body="Register with your email so responders can reach you."
                        >
                            <Users />
                        </FeatureCell>
                        <FeatureCell
                            title="2. Report the incident"
                            body="Describe what happened, drop a pin, attach photos or video."
                        >
                            <Shield />
                        </FeatureCell>
                        <FeatureCell
                            title="3. Track the outcome"
                            body="Authorities review every report and update its status."
                        >
                            <CheckCircle />
                        </FeatureCell>
                    </div>
                </div>
            </div>

            // Call to action
            <div class="py-16">
                <div class="max-w-3xl mx-auto px-4 text-center">
                    <h2 class="text-3xl font-extrabold">"Ready to make your community safer?"</h2>
                    <div class="mt-8">
                        <Link to="/register">
                            <span class="btn btn-error text-white px-8">"Join Ajali! today"</span>
                        </Link>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeatureCell(
    title: &'static str,
    body: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center">
            <div class="flex items-center justify-center h-12 w-12 rounded-md bg-error text-white p-3">
                {children()}
            </div>
            <h3 class="mt-6 text-lg font-medium">{title}</h3>
            <p class="mt-2 text-base-content/70">{body}</p>
        </div>
    }
}

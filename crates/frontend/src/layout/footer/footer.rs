use std::time::Duration;

use chrono::{Datelike, Utc};
use contracts::shared::business_hours::{BusinessHoursClock, BusinessHoursStatus};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::constants::BUSINESS_HOURS_REFRESH_MS;

#[component]
pub fn Footer() -> impl IntoView {
    let clock = BusinessHoursClock::default();
    let rows = clock.schedule().display_rows();
    let status = RwSignal::new(clock.status(Utc::now()));

    let refresh = move || {
        let next: BusinessHoursStatus = BusinessHoursClock::default().status(Utc::now());
        if status.with_untracked(|current| *current != next) {
            status.set(next);
        }
    };

    match set_interval_with_handle(
        refresh,
        Duration::from_millis(u64::from(BUSINESS_HOURS_REFRESH_MS)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("business hours: cannot start refresh: {:?}", e),
    }

    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__company">
                    <span class="footer__brand">"Peroz Corp"</span>
                    <p>"Importer and distribution partner for East Coast retailers."</p>
                    <span class=move || {
                        if status.get().open {
                            "hours-status hours-status--open"
                        } else {
                            "hours-status hours-status--closed"
                        }
                    }>{move || status.get().label}</span>
                </div>

                <div class="footer__links">
                    <h3>"Quick Links"</h3>
                    <A href="/">"Home"</A>
                    <A href="/products">"Products"</A>
                    <A href="/contact">"Contact"</A>
                </div>

                <div class="footer__contact">
                    <h3>"Contact Us"</h3>
                    <p>"6304 Gravel Ave. Suite G."</p>
                    <p>"Alexandria, Virginia 22310"</p>
                    <a href="tel:+13013058748">"+1 301-305-8748"</a>
                </div>

                <div class="footer__hours">
                    <h3>"Business Hours"</h3>
                    <table class="hours-table">
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let class = if row.open { "hours-table__row" } else { "hours-table__row hours-table__row--closed" };
                                    view! {
                                        <tr class=class>
                                            <td>{row.days}</td>
                                            <td>{row.hours}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <p class="footer__zone">"Eastern Time (US)"</p>
                </div>
            </div>
            <p class="footer__copyright">{format!("© {} Peroz Corp. All rights reserved.", year)}</p>
        </footer>
    }
}

//! Proof upload/download page for signed-in users.

use leptos::prelude::*;

use crate::components::upload_proof_form::UploadProofForm;

#[component]
pub fn ProofsPage() -> impl IntoView {
    view! {
        <section class="proofs-page">
            <h1 class="page__title">"Proofs"</h1>
            <UploadProofForm/>
        </section>
    }
}

use leptos::*;

use crate::components::FormSignal;

/// Backend response of the last successful upload.
#[component]
pub fn UploadResultPanel(form: FormSignal) -> impl IntoView {
    move || {
        form.with(|f| f.result().cloned()).map(|response| {
            let records = response.records_processed();
            view! {
                <div class="upload-response">
                    <h5>"Upload Response:"</h5>

                    {response.message.map(|message| view! {
                        <p class="response-message">{message}</p>
                    })}

                    {response.data.is_some().then(|| view! {
                        <div class="processed-data">
                            <h6>"Processed Data:"</h6>
                            {records.map(|count| view! {
                                <p>"Records processed: " {count}</p>
                            })}
                        </div>
                    })}
                </div>
            }
        })
    }
}

use crate::api::files::{delete_file, list_files};
use crate::components::data_table::{Column, DataTable};
use crate::components::page_shell::PageShell;
use crate::config::Config;
use log::info;
use shared::{format_size, EmptyState, FileEntry};
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[function_component(Files)]
pub fn files() -> Html {
    let config = use_memo((), |_| Config::view());
    let files = use_state(|| None::<Rc<Vec<FileEntry>>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let files = files.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match list_files().await {
                    Ok(list) => {
                        error.set(None);
                        files.set(Some(Rc::new(list)));
                    }
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |id: Uuid| {
            let error = error.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_file(id).await {
                    Ok(()) => {
                        info!("File {} removed, reloading", id);
                        reload.set(*reload + 1);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let actions = Callback::from(move |f: FileEntry| {
        let id = f.id;
        html! {
            <button
                onclick={on_delete.reform(move |_: MouseEvent| id)}
                class="text-sm text-red-600 hover:text-red-800"
            >
                {"Delete"}
            </button>
        }
    });

    let columns = use_memo((), |_| {
        vec![
            Column::accessor("Name", "name"),
            Column::cell("Type", |f: &FileEntry| html! {
                <span class="text-xs uppercase text-gray-500">{f.extension().unwrap_or_else(|| f.kind.clone())}</span>
            }),
            Column::cell("Size", |f: &FileEntry| html! { {format_size(f.size)} }),
            Column::badge("Verification", "verificationStatus"),
            Column::accessor("Uploaded", "uploadedAt"),
            Column::accessor("Uploaded by", "uploadedBy"),
        ]
    });

    html! {
        <PageShell title="Files" error={(*error).clone()}>
            <DataTable<FileEntry>
                rows={(*files).clone()}
                {columns}
                loading={*loading}
                searchable=true
                search_placeholder="Search files..."
                search_debounce_ms={config.search_debounce_ms}
                page_size={config.default_page_size}
                page_size_options={config.page_size_choices()}
                empty_state={EmptyState::new("No files", "Uploaded documents appear here for verification.")}
                {actions}
            />
        </PageShell>
    }
}

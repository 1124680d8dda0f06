//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで1枚の写真を受け付け、
//! FileReaderでdata URLとして読み込んでから記述子をコアへ渡す。
//! 検証（形式・サイズ）はコア側で行う。

use leptos::prelude::*;
use movie_match_common::FileDescriptor;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<F>(on_file: F) -> impl IntoView
where
    F: Fn(FileDescriptor) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_file = on_file.clone();
        move |file: File| read_file(file, on_file.clone())
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                if let Some(file) = files.get(0) {
                    handle_file(file);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(input) = document
                .create_element("input")
                .map(|e| e.unchecked_into::<web_sys::HtmlInputElement>())
            else {
                return;
            };
            input.set_type("file");
            input.set_accept("image/*");

            let handle_file = handle_file.clone();
            let input_ref = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = input_ref.files().and_then(|files| files.get(0)) {
                    handle_file(file);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"写真をドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"画像ファイル（10MBまで）"</p>
        </div>
    }
}

/// FileReaderでdata URLとして読み込み、記述子に変換して通知する
fn read_file<F>(file: File, on_file: F)
where
    F: Fn(FileDescriptor) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        return;
    };
    let media_type = file.type_();
    let byte_size = file.size() as u64;

    let reader_ref = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_ref.result() {
            if let Some(preview_source) = result.as_string() {
                on_file(FileDescriptor {
                    media_type: media_type.clone(),
                    byte_size,
                    preview_source,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}

use wasm_bindgen::JsCast;
use web_sys::Element;

const REVEAL_ATTRIBUTES: [&str; 2] = ["data-aos", "data-aos-delay"];

/// Removes reveal-on-scroll annotations from everything inside each slide's
/// `.hero-content`, so the reveal library cannot hide slide text.
pub fn strip_reveal_annotations(container: &Element) -> usize {
    let Ok(nodes) = container.query_selector_all(".hero-slide .hero-content [data-aos]") else {
        return 0;
    };
    let mut stripped = 0;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            for attribute in REVEAL_ATTRIBUTES {
                let _ = element.remove_attribute(attribute);
            }
            stripped += 1;
        }
    }
    stripped
}

// Needs a real DOM: `wasm-pack test --headless --firefox`
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(html: &str) -> Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let container = document.create_element("div").expect("div");
        container.set_inner_html(html);
        container
    }

    #[wasm_bindgen_test]
    fn strips_annotations_inside_slide_content() {
        let container = container(
            r#"<div class="hero-slide">
                <div class="hero-content">
                    <h1 id="title" data-aos="fade-up">Title</h1>
                    <p id="text" data-aos="fade-up" data-aos-delay="200">Text</p>
                </div>
            </div>
            <section id="outside" data-aos="fade-up" data-aos-delay="100"></section>"#,
        );

        assert_eq!(strip_reveal_annotations(&container), 2);

        for id in ["#title", "#text"] {
            let element = container.query_selector(id).unwrap().expect("element");
            assert!(!element.has_attribute("data-aos"), "{}", id);
            assert!(!element.has_attribute("data-aos-delay"), "{}", id);
        }
        let outside = container.query_selector("#outside").unwrap().expect("section");
        assert!(outside.has_attribute("data-aos"));
        assert!(outside.has_attribute("data-aos-delay"));
    }

    #[wasm_bindgen_test]
    fn nothing_to_strip_without_slides() {
        let container = container(r#"<p data-aos="zoom-in">No slider here</p>"#);
        assert_eq!(strip_reveal_annotations(&container), 0);
    }
}

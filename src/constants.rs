// DOM hooks the host page provides, plus renderer tuning.

// Slider
pub const SLIDER_TRACK_ID: &str = "slider-track"; // tall scroll container
pub const SLIDER_CANVAS_ID: &str = "slider-canvas";
pub const OVERLAY_ROOT_ID: &str = "slider-overlay";

// Page chrome
pub const HEADER_ID: &str = "site-header";
pub const HEADER_HIDDEN_CLASS: &str = "header-hidden";

// Header navigation
pub const NAV_TARGET_ATTR: &str = "data-nav-target"; // value is a section id
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MENU_OPEN_CLASS: &str = "menu-open";

// Product accordion
pub const ACCORDION_ITEM_ATTR: &str = "data-accordion-item";
pub const PRODUCT_SHOWCASE_ID: &str = "product-showcase";
pub const DEFAULT_OPEN_PRODUCT: &str = "item-1";

// Product detail modal ("Read More" buttons carry the product number)
pub const PRODUCT_DETAIL_ATTR: &str = "data-product-detail";
pub const PRODUCT_MODAL_ID: &str = "product-modal";
pub const PRODUCT_MODAL_IMAGE_ID: &str = "product-modal-image";
pub const PRODUCT_MODAL_COUNTER_ID: &str = "product-modal-counter";
pub const PRODUCT_MODAL_CLOSE_ID: &str = "product-modal-close";
pub const PRODUCT_MODAL_PREV_ID: &str = "product-modal-prev";
pub const PRODUCT_MODAL_NEXT_ID: &str = "product-modal-next";
pub const PRODUCT_ZOOM_IN_ID: &str = "product-zoom-in";
pub const PRODUCT_ZOOM_OUT_ID: &str = "product-zoom-out";
pub const PRODUCT_DETAILS: [(&str, &[&str]); 6] = [
    (
        "GALVANIZED IRON PIPE",
        &["/Galvinzed Pipe-page-001.jpg", "/Galvinzed Pipe-page-002.jpg"],
    ),
    (
        "ERW MS BLACK PIPE",
        &["/MS Pipe-page-001.jpg", "/MS Pipe-page-002.jpg"],
    ),
    (
        "PROFILE TUBE",
        &["/PDF Profile -11.jpg", "/PDF Profile -12.jpg"],
    ),
    (
        "SCAFFOLDING PIPE",
        &["/Scaffolding Tubes-page-001.jpg", "/Scaffolding Tubes-page-001.jpg"],
    ),
    (
        "SQUARE TUBE",
        &["/RHS,SHS, Conduite-page-001.jpg", "/RHS,SHS, Conduite-page-002.jpg"],
    ),
    (
        "ERW FILTER STEEL PIPE",
        &["/MS Pipe-page-001 (2).jpg", "/MS Pipe-page-002 (2).jpg"],
    ),
];

// Digital catalogue
pub const CATALOGUE_IMAGE_ID: &str = "catalogue-page";
pub const CATALOGUE_TITLE_ID: &str = "catalogue-title";
pub const CATALOGUE_COUNTER_ID: &str = "catalogue-counter";
pub const CATALOGUE_PREV_ID: &str = "catalogue-prev";
pub const CATALOGUE_NEXT_ID: &str = "catalogue-next";
pub const CATALOGUE_OPEN_ID: &str = "catalogue-maximize";
pub const CATALOGUE_LIGHTBOX_ID: &str = "catalogue-lightbox";
pub const CATALOGUE_LIGHTBOX_IMAGE_ID: &str = "catalogue-lightbox-image";
pub const CATALOGUE_CLOSE_ID: &str = "catalogue-lightbox-close";
pub const CATALOGUE_LIGHTBOX_PREV_ID: &str = "catalogue-lightbox-prev";
pub const CATALOGUE_LIGHTBOX_NEXT_ID: &str = "catalogue-lightbox-next";
pub const CATALOGUE_PAGES: [(&str, &str); 4] = [
    ("G.I. Pipes Catalogue", "/Galvinzed Pipe-page-001.jpg"),
    ("M.S. Pipes Specs", "/MS Pipe-page-001.jpg"),
    ("Scaffolding Tubes", "/Scaffolding Tubes-page-001.jpg"),
    ("Structural Sections", "/RHS,SHS, Conduite-page-001.jpg"),
];

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_SEND_DELAY_MS: i32 = 1000; // simulated delivery
pub const CONTACT_SENT_TEXT: &str = "Message sent successfully!";

// Shared visibility class
pub const HIDDEN_CLASS: &str = "hidden";

// Camera clip planes
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

// Fog and background (linear RGB of #020617)
pub const FOG_START: f32 = 18.0;
pub const FOG_END: f32 = 70.0;
pub const BACKGROUND_RGB: [f32; 3] = [0.0006, 0.0021, 0.0080];
pub const AMBIENT_TINT_STRENGTH: f32 = 0.35;

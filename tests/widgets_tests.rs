#![allow(dead_code)]
mod common;

use common::core::accordion::*;
use common::core::contact::*;
use common::core::gallery::*;
use common::core::header::{HeaderVisibility, MobileMenu};

fn products() -> Accordion {
    Accordion::new(["item-1", "item-2", "item-3"], Some("item-1"))
}

#[test]
fn accordion_keeps_at_most_one_item_open() {
    let mut acc = products();
    assert_eq!(acc.open_item(), Some("item-1"));
    assert_eq!(acc.reduce(AccordionAction::Toggle("item-3".into())), Some("item-3"));
    assert_eq!(acc.items().iter().filter(|i| i.open).count(), 1);
    assert_eq!(acc.open_item(), Some("item-3"));
}

#[test]
fn toggling_the_open_item_closes_it() {
    let mut acc = products();
    assert_eq!(acc.reduce(AccordionAction::Toggle("item-1".into())), None);
    assert_eq!(acc.open_item(), None);
}

#[test]
fn accordion_ignores_unknown_ids_and_closes_all() {
    let mut acc = products();
    assert_eq!(acc.reduce(AccordionAction::Toggle("item-9".into())), None);
    assert_eq!(acc.open_item(), Some("item-1"));
    acc.reduce(AccordionAction::CloseAll);
    assert_eq!(acc.open_item(), None);
}

#[test]
fn product_number_parses_item_suffix() {
    assert_eq!(product_number("item-3"), Some(3));
    assert_eq!(product_number("item-12"), Some(12));
    assert_eq!(product_number("item-x"), None);
}

#[test]
fn pager_wraps_both_ways() {
    let mut p = Pager::new(4);
    assert_eq!(p.prev(), 3);
    assert_eq!(p.next(), 0);
    assert_eq!(p.next(), 1);
    assert!(p.go_to(3));
    assert!(!p.go_to(4));
    assert_eq!(p.next(), 0);
}

#[test]
fn empty_pager_stays_put() {
    let mut p = Pager::new(0);
    assert!(p.is_empty());
    assert_eq!(p.next(), 0);
    assert_eq!(p.prev(), 0);
}

#[test]
fn lightbox_opens_at_first_image_and_pages_while_open() {
    let mut lb = Lightbox::default();
    assert_eq!(lb.next(), None);
    lb.open(3);
    assert!(lb.is_open());
    assert_eq!(lb.pager().index(), 0);
    assert_eq!(lb.next(), Some(1));
    assert_eq!(lb.prev(), Some(0));
    lb.close();
    assert!(!lb.is_open());
    assert_eq!(lb.prev(), None);

    lb.open_at(4, 2);
    assert_eq!(lb.pager().index(), 2);
    lb.open(0);
    assert!(!lb.is_open());
}

#[test]
fn email_shape_check() {
    assert!(looks_like_email("sales@example.com"));
    assert!(looks_like_email("a@b.co"));
    assert!(!looks_like_email("sales@example"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("sales example.com"));
    assert!(!looks_like_email("a@.com"));
}

#[test]
fn email_check_tries_every_at_sign() {
    // the leading '@' has no prefix, the second one does
    assert!(looks_like_email("@x@y.z"));
    assert!(looks_like_email("a@@b.c"));
    assert!(looks_like_email("a@b..c"));
    assert!(looks_like_email("reach us at a@b.co today"));
    assert!(looks_like_email("@@x.y"));
    assert!(!looks_like_email("a@b@c"));
}

#[test]
fn empty_form_reports_every_field() {
    let mut form = ContactForm::default();
    assert!(!form.submit());
    assert_eq!(form.error(Field::Name), Some("Name is required"));
    assert_eq!(form.error(Field::Email), Some("Email is required"));
    assert_eq!(form.error(Field::Phone), Some("Phone number is required"));
    assert_eq!(form.error(Field::Message), Some("Message is required"));
    assert_eq!(form.state(), SubmitState::Idle);
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = ContactForm::default();
    form.validate();
    form.set(Field::Name, "Asha");
    assert_eq!(form.error(Field::Name), None);
    assert!(form.error(Field::Email).is_some());
}

#[test]
fn invalid_email_is_flagged() {
    let mut form = ContactForm::default();
    form.set(Field::Name, "Asha");
    form.set(Field::Email, "not-an-email");
    form.set(Field::Phone, "0300 1234567");
    form.set(Field::Message, "Need a quote");
    assert!(!form.validate());
    assert_eq!(form.error(Field::Email), Some(EMAIL_INVALID));
}

#[test]
fn valid_submit_completes_and_resets() {
    let mut form = ContactForm::default();
    form.set(Field::Name, "Asha");
    form.set(Field::Email, "asha@example.com");
    form.set(Field::Phone, "0300 1234567");
    form.set(Field::Message, "Need 200 GI pipes");
    assert!(form.submit());
    assert_eq!(form.state(), SubmitState::Submitting);
    // double submit is refused while in flight
    assert!(!form.submit());
    form.complete();
    assert_eq!(form.state(), SubmitState::Sent);
    assert_eq!(form.value(Field::Name), "");
    assert!(!form.has_errors());
}

#[test]
fn complete_without_submit_does_nothing() {
    let mut form = ContactForm::default();
    form.set(Field::Name, "Asha");
    form.complete();
    assert_eq!(form.state(), SubmitState::Idle);
    assert_eq!(form.value(Field::Name), "Asha");
}

#[test]
fn input_names_round_trip() {
    for f in Field::ALL {
        assert_eq!(Field::from_input_name(f.input_name()), Some(f));
    }
    assert_eq!(Field::from_input_name("subject"), None);
}

#[test]
fn header_hides_on_scroll_down_past_threshold() {
    let mut h = HeaderVisibility::default();
    assert!(!h.update(40.0));
    assert!(!h.is_hidden());
    assert!(h.update(120.0));
    assert!(h.is_hidden());
    assert!(!h.update(200.0));
    // any upward scroll shows it again
    assert!(h.update(180.0));
    assert!(!h.is_hidden());
}

#[test]
fn zoom_steps_between_one_and_three() {
    let mut z = Zoom::default();
    assert_eq!(z.scale(), 1.0);
    assert_eq!(z.zoom_out(), 1.0);
    assert!((z.zoom_in() - 1.2).abs() < 1e-6);
    for _ in 0..20 {
        z.zoom_in();
    }
    assert!((z.scale() - 3.0).abs() < 1e-6);
    assert!((z.zoom_out() - 2.8).abs() < 1e-6);
    z.reset();
    assert_eq!(z.scale(), 1.0);
}

#[test]
fn detail_viewer_opens_on_first_image_at_normal_size() {
    let mut v = DetailViewer::default();
    assert_eq!(v.product(), None);
    v.open(2, 2);
    assert_eq!(v.product(), Some(2));
    assert_eq!(v.image_index(), 0);
    assert_eq!(v.next(), Some(1));
    assert_eq!(v.next(), Some(0));
    assert_eq!(v.prev(), Some(1));
    v.zoom_mut().zoom_in();

    // a different product starts over
    v.open(4, 2);
    assert_eq!(v.product(), Some(4));
    assert_eq!(v.image_index(), 0);
    assert_eq!(v.zoom().scale(), 1.0);
}

#[test]
fn closing_the_detail_viewer_resets_everything() {
    let mut v = DetailViewer::default();
    v.open(0, 3);
    v.next();
    v.zoom_mut().zoom_in();
    v.close();
    assert_eq!(v.product(), None);
    assert_eq!(v.image_index(), 0);
    assert_eq!(v.zoom().scale(), 1.0);
    assert_eq!(v.next(), None);

    v.open(1, 0);
    assert_eq!(v.product(), None);
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut m = MobileMenu::default();
    assert!(!m.is_open());
    assert!(m.toggle());
    assert!(m.close());
    assert!(!m.is_open());
    assert!(!m.close());
    m.toggle();
    assert!(!m.toggle());
}

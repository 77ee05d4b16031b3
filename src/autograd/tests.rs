//! Tests for the scalar autograd engine.
//!
//! Covers backward correctness per op (add, mul, pow, log, exp), gradient
//! accumulation through shared nodes, set_data, and zero_grad.

use crate::autograd::{Exp, Log, Pow, ScalarNode, ValueRef};

#[test]
fn scalar_add_backward() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a + &b;
    assert_eq!(c.data(), 5.0);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn scalar_mul_backward() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a * &b;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn scalar_pow_backward() {
    let a = ValueRef::new(2.0);
    let b = (&a).pow(3.0);
    assert!((b.data() - 8.0).abs() < 1e-10);
    b.backward();
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert!((a.grad() - 12.0).abs() < 1e-10);
}

#[test]
fn scalar_log_backward() {
    let a = ValueRef::new(std::f64::consts::E);
    let b = (&a).log();
    assert!((b.data() - 1.0).abs() < 1e-10);
    b.backward();
    // d/dx ln(x) = 1/x = 1/e at x=e
    assert!((a.grad() - 1.0 / std::f64::consts::E).abs() < 1e-10);
}

#[test]
fn scalar_exp_backward() {
    let a = ValueRef::new(1.0);
    let b = (&a).exp();
    assert!((b.data() - std::f64::consts::E).abs() < 1e-10);
    b.backward();
    assert!((a.grad() - std::f64::consts::E).abs() < 1e-10);
}

#[test]
fn scalar_topo_and_gradient_accumulation() {
    // Use a value twice: c = a + a. dc/da = 2.
    let a = ValueRef::new(3.0);
    let c = &a + &a;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn scalar_neg_backward() {
    let a = ValueRef::new(3.0);
    let b = -&a;
    assert_eq!(b.data(), -3.0);
    b.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn scalar_sub_backward() {
    let a = ValueRef::new(5.0);
    let b = ValueRef::new(2.0);
    let c = &a - &b;
    assert_eq!(c.data(), 3.0);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn scalar_div_backward() {
    let a = ValueRef::new(6.0);
    let b = ValueRef::new(2.0);
    let c = &a / &b;
    assert_eq!(c.data(), 3.0);
    c.backward();
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), -1.5); // d/db (a/b) = -a/b^2 = -6/4 = -1.5
}

#[test]
fn scalar_zero_grad_after_step() {
    let a = ValueRef::new(2.0);
    let b = &a * &ValueRef::new(3.0);
    b.backward();
    assert_eq!(a.grad(), 3.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn scalar_set_data_overwrites_value_only() {
    let a = ValueRef::new(2.0);
    let b = &a * &ValueRef::new(3.0);
    b.backward();
    a.set_data(1.5);
    assert_eq!(a.data(), 1.5);
    // The gradient slot is untouched; zeroing is a separate step.
    assert_eq!(a.grad(), 3.0);
}

#[test]
fn scalar_nll_shape_backward() {
    // loss = -ln(e^a / (e^a + e^b)): the exp/log/div chain the model's
    // log-softmax loss is built from. dloss/da = p_a - 1, dloss/db = p_b.
    let a = ValueRef::new(0.5);
    let b = ValueRef::new(-0.5);
    let total = &(&a).exp() + &(&b).exp();
    let loss = -&(&(&a).exp() / &total).log();
    assert!(loss.data() > 0.0);
    loss.backward();
    let p_a = (&a).exp().data() / total.data();
    let p_b = (&b).exp().data() / total.data();
    assert!((a.grad() - (p_a - 1.0)).abs() < 1e-10);
    assert!((b.grad() - p_b).abs() < 1e-10);
}

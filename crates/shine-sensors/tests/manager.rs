//! Subscription manager flows
//!
//! Direct, gated (granted / denied / error), unsupported, and overlapping
//! gestures against the simulated sensor.

use std::cell::RefCell;
use std::rc::Rc;

use shine_mapper::OrientationSample;
use shine_sensors::{
    Activation, OrientationHandler, PermissionOutcome, SensorError, SimulatedSensor,
    SubscriptionManager, SubscriptionState,
};

fn recording() -> (OrientationHandler, Rc<RefCell<Vec<OrientationSample>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let handler: OrientationHandler = Box::new(move |sample| sink.borrow_mut().push(sample));
    (handler, seen)
}

// ============================================================================
// INITIALIZATION
// ============================================================================

#[test]
fn test_direct_subscribes_immediately() {
    let sensor = SimulatedSensor::direct();
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, seen) = recording();

    assert_eq!(manager.initialize(handler), Ok(SubscriptionState::Subscribed));
    assert_eq!(manager.state(), SubscriptionState::Subscribed);
    assert!(!manager.awaiting_gesture());

    sensor.dispatch(OrientationSample::tilt(1.0, 2.0));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(sensor.request_count(), 0);
}

#[test]
fn test_unsupported_is_terminal() {
    let sensor = SimulatedSensor::unsupported();
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, _) = recording();

    assert_eq!(manager.initialize(handler), Err(SensorError::SensorUnavailable));
    assert_eq!(manager.state(), SubscriptionState::Unsupported);

    let result = smol::block_on(manager.activate());
    assert_eq!(result, Ok(Activation::Ignored));
    assert_eq!(manager.state(), SubscriptionState::Unsupported);
    assert_eq!(sensor.subscriber_count(), 0);
}

#[test]
fn test_gated_waits_for_gesture() {
    let sensor = SimulatedSensor::gated(PermissionOutcome::Granted);
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, _) = recording();

    assert_eq!(manager.initialize(handler), Ok(SubscriptionState::Unsubscribed));
    assert!(manager.awaiting_gesture());
    assert_eq!(sensor.subscriber_count(), 0);
    assert_eq!(sensor.request_count(), 0);
}

// ============================================================================
// PERMISSION OUTCOMES
// ============================================================================

#[test]
fn test_granted_subscribes() {
    let sensor = SimulatedSensor::gated(PermissionOutcome::Granted);
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, seen) = recording();
    manager.initialize(handler).unwrap();

    let result = smol::block_on(manager.activate());
    assert_eq!(result, Ok(Activation::Subscribed));
    assert_eq!(manager.state(), SubscriptionState::Subscribed);
    assert_eq!(sensor.subscriber_count(), 1);

    sensor.dispatch(OrientationSample::tilt(0.0, 30.0));
    assert_eq!(seen.borrow().as_slice(), &[OrientationSample::tilt(0.0, 30.0)]);
}

#[test]
fn test_denied_never_subscribes() {
    let sensor = SimulatedSensor::gated(PermissionOutcome::Denied);
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, seen) = recording();
    manager.initialize(handler).unwrap();

    let result = smol::block_on(manager.activate());
    assert_eq!(result, Err(SensorError::PermissionDenied));
    assert_eq!(manager.state(), SubscriptionState::Denied);
    assert_eq!(sensor.subscriber_count(), 0);

    sensor.dispatch(OrientationSample::tilt(0.0, 30.0));
    assert!(seen.borrow().is_empty());

    // No retry path
    let again = smol::block_on(manager.activate());
    assert_eq!(again, Ok(Activation::Ignored));
    assert_eq!(sensor.request_count(), 1);
}

#[test]
fn test_request_error_keeps_detail() {
    let sensor = SimulatedSensor::gated(PermissionOutcome::Error("SecurityError".into()));
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, _) = recording();
    manager.initialize(handler).unwrap();

    let result = smol::block_on(manager.activate());
    assert_eq!(
        result,
        Err(SensorError::PermissionRequestFailed("SecurityError".into()))
    );
    assert_eq!(manager.state(), SubscriptionState::Denied);
    assert_eq!(sensor.subscriber_count(), 0);
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn test_overlapping_gestures_issue_one_request() {
    let (sensor, prompt) = SimulatedSensor::deferred();
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, _) = recording();
    manager.initialize(handler).unwrap();

    let (first, second) = smol::block_on(smol::future::zip(manager.activate(), async {
        let second = manager.activate().await;
        assert_eq!(manager.state(), SubscriptionState::PermissionPending);
        assert_eq!(sensor.request_count(), 1);
        prompt.resolve(PermissionOutcome::Granted);
        second
    }));

    assert_eq!(first, Ok(Activation::Subscribed));
    assert_eq!(second, Ok(Activation::Ignored));
    assert_eq!(sensor.request_count(), 1);
    assert_eq!(sensor.subscriber_count(), 1);
}

#[test]
fn test_unresolved_request_stays_pending() {
    let (sensor, _prompt) = SimulatedSensor::deferred();
    let manager = SubscriptionManager::new(sensor.clone());
    let (handler, _) = recording();
    manager.initialize(handler).unwrap();

    let polled = smol::block_on(smol::future::poll_once(manager.activate()));
    assert!(polled.is_none());
    assert_eq!(manager.state(), SubscriptionState::PermissionPending);
    assert!(!manager.awaiting_gesture());
    assert_eq!(sensor.subscriber_count(), 0);
}

#[test]
fn test_executor_driven_gestures() {
    let (sensor, prompt) = SimulatedSensor::deferred();
    let manager = Rc::new(SubscriptionManager::new(sensor.clone()));
    let (handler, _) = recording();
    manager.initialize(handler).unwrap();

    let ex = smol::LocalExecutor::new();
    let clicks: Vec<_> = (0..3)
        .map(|_| {
            let manager = manager.clone();
            ex.spawn(async move { manager.activate().await })
        })
        .collect();

    while ex.try_tick() {}
    assert_eq!(sensor.request_count(), 1);
    assert_eq!(manager.state(), SubscriptionState::PermissionPending);
    prompt.resolve(PermissionOutcome::Denied);

    smol::block_on(ex.run(async {
        let mut results = Vec::new();
        for click in clicks {
            results.push(click.await);
        }
        assert_eq!(
            results.iter().filter(|r| **r == Err(SensorError::PermissionDenied)).count(),
            1
        );
        assert_eq!(
            results.iter().filter(|r| **r == Ok(Activation::Ignored)).count(),
            2
        );
    }));

    assert_eq!(manager.state(), SubscriptionState::Denied);
}

use crate::auth::{AuthStrategy, DeviceClass};

const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0";

#[test]
fn test_device_class_from_user_agent() {
    assert_eq!(DeviceClass::from_user_agent(IPHONE), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_user_agent(ANDROID), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_user_agent("opera mini/8.0"), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_user_agent(DESKTOP), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
}

#[test]
fn test_strategy_fixes_flow_type() {
    let mobile = AuthStrategy::for_device(DeviceClass::Mobile);
    let desktop = AuthStrategy::for_device(DeviceClass::Desktop);

    assert_eq!(mobile, AuthStrategy::MobileLinkFallback);
    assert_eq!(mobile.flow_type(), "mobile");
    assert_eq!(desktop, AuthStrategy::DesktopOtpFallback);
    assert_eq!(desktop.flow_type(), "desktop");
}

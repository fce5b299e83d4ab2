use std::sync::LazyLock;

use crate::dist::Distribution;

pub static D1: LazyLock<Distribution> = LazyLock::new(|| Distribution::scalar(1.0));
pub static D2: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(2));
pub static D3: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(3));
pub static D4: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(4));
pub static D6: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(6));
pub static D8: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(8));
pub static D10: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(10));
pub static D12: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(12));
pub static D20: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(20));
pub static D100: LazyLock<Distribution> = LazyLock::new(|| Distribution::die(100));

pub fn d1() -> Distribution {
    D1.clone()
}

pub fn d2() -> Distribution {
    D2.clone()
}

pub fn d3() -> Distribution {
    D3.clone()
}

pub fn d4() -> Distribution {
    D4.clone()
}

pub fn d6() -> Distribution {
    D6.clone()
}

pub fn d8() -> Distribution {
    D8.clone()
}

pub fn d10() -> Distribution {
    D10.clone()
}

pub fn d12() -> Distribution {
    D12.clone()
}

pub fn d20() -> Distribution {
    D20.clone()
}

pub fn d100() -> Distribution {
    D100.clone()
}

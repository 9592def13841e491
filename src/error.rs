//! Display bring-up failures.

use core::fmt;

/// Which bring-up stage failed, carrying the driver's own error.
///
/// `C` is the HAL's SPI config error. `I` and `W` are mipidsi's init and
/// write errors; those are generic over the whole SPI/D-C type stack, so the
/// firmware only ever names them as `impl Debug`.
#[derive(Debug)]
pub enum SetupError<C, I, W> {
    SpiConfig(C),
    PanelInit(I),
    PanelWrite(W),
}

impl<C: fmt::Debug, I: fmt::Debug, W: fmt::Debug> fmt::Display for SetupError<C, I, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::SpiConfig(e) => write!(f, "SPI config rejected: {:?}", e),
            SetupError::PanelInit(e) => write!(f, "ST7735 did not initialise: {:?}", e),
            SetupError::PanelWrite(e) => write!(f, "ST7735 rejected the first frame: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum FakeBus {
        Nack,
        Dc(u8),
    }

    type Err = SetupError<&'static str, FakeBus, FakeBus>;

    #[test]
    fn message_names_the_stage_and_keeps_the_cause() {
        let e: Err = SetupError::SpiConfig("FrequencyOutOfRange");
        assert_eq!(e.to_string(), "SPI config rejected: \"FrequencyOutOfRange\"");

        let e: Err = SetupError::PanelInit(FakeBus::Dc(13));
        assert_eq!(e.to_string(), "ST7735 did not initialise: Dc(13)");

        let e: Err = SetupError::PanelWrite(FakeBus::Nack);
        assert_eq!(e.to_string(), "ST7735 rejected the first frame: Nack");
    }

    #[test]
    fn cause_survives_in_debug_output() {
        let e: Err = SetupError::PanelInit(FakeBus::Nack);
        assert_eq!(format!("{:?}", e), "PanelInit(Nack)");
    }
}

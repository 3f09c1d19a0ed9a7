//! IPMA weather types
//!
//! IPMA classifies each forecast day with a numeric `idWeatherType`
//! (1-27). Codes outside that range, including the `-99` IPMA uses for
//! missing values, map to [`WeatherType::Unknown`].

/// Description used when the weather type is missing or not recognised
pub const UNAVAILABLE_DESCRIPTION: &str = "Informação não disponível";

/// Weather condition as classified by IPMA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherType {
    /// 1
    ClearSky,
    /// 2
    PartlyCloudy,
    /// 3
    SunnyIntervals,
    /// 4
    Cloudy,
    /// 5
    CloudyHighCloud,
    /// 6
    Showers,
    /// 7
    LightShowers,
    /// 8
    HeavyShowers,
    /// 9
    Rain,
    /// 10
    LightRain,
    /// 11
    HeavyRain,
    /// 12
    IntermittentRain,
    /// 13
    IntermittentLightRain,
    /// 14
    IntermittentHeavyRain,
    /// 15
    Thunderstorms,
    /// 16
    ShowersAndThunderstorms,
    /// 17
    Snow,
    /// 18
    LightSnow,
    /// 19
    Hail,
    /// 20
    Fog,
    /// 21
    Mist,
    /// 22
    StrongWind,
    /// 23
    NorthWind,
    /// 24
    Frost,
    /// 25
    RainAndSnow,
    /// 26
    ShowersAndThunder,
    /// 27
    VariableCloudiness,
    /// Missing or unrecognised code
    Unknown,
}

impl WeatherType {
    /// Convert an IPMA `idWeatherType` code
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::ClearSky,
            2 => Self::PartlyCloudy,
            3 => Self::SunnyIntervals,
            4 => Self::Cloudy,
            5 => Self::CloudyHighCloud,
            6 => Self::Showers,
            7 => Self::LightShowers,
            8 => Self::HeavyShowers,
            9 => Self::Rain,
            10 => Self::LightRain,
            11 => Self::HeavyRain,
            12 => Self::IntermittentRain,
            13 => Self::IntermittentLightRain,
            14 => Self::IntermittentHeavyRain,
            15 => Self::Thunderstorms,
            16 => Self::ShowersAndThunderstorms,
            17 => Self::Snow,
            18 => Self::LightSnow,
            19 => Self::Hail,
            20 => Self::Fog,
            21 => Self::Mist,
            22 => Self::StrongWind,
            23 => Self::NorthWind,
            24 => Self::Frost,
            25 => Self::RainAndSnow,
            26 => Self::ShowersAndThunder,
            27 => Self::VariableCloudiness,
            _ => Self::Unknown,
        }
    }

    /// Convert an optional code, treating `None` as unknown
    #[must_use]
    pub const fn from_optional_code(code: Option<i64>) -> Self {
        match code {
            Some(code) => Self::from_code(code),
            None => Self::Unknown,
        }
    }

    /// Portuguese description shown to the user
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Céu limpo",
            Self::PartlyCloudy => "Céu pouco nublado",
            Self::SunnyIntervals => "Céu parcialmente nublado",
            Self::Cloudy => "Céu muito nublado ou encoberto",
            Self::CloudyHighCloud => "Céu nublado por nuvens altas",
            Self::Showers => "Aguaceiros",
            Self::LightShowers => "Aguaceiros fracos",
            Self::HeavyShowers => "Aguaceiros fortes",
            Self::Rain => "Chuva",
            Self::LightRain => "Chuva fraca ou chuvisco",
            Self::HeavyRain => "Chuva forte",
            Self::IntermittentRain => "Períodos de chuva",
            Self::IntermittentLightRain => "Períodos de chuva fraca",
            Self::IntermittentHeavyRain => "Períodos de chuva forte",
            Self::Thunderstorms => "Trovoada",
            Self::ShowersAndThunderstorms => "Aguaceiros com trovoada",
            Self::Snow => "Neve",
            Self::LightSnow => "Neve fraca",
            Self::Hail => "Granizo",
            Self::Fog => "Nevoeiro",
            Self::Mist => "Neblina",
            Self::StrongWind => "Vento forte",
            Self::NorthWind => "Nortada",
            Self::Frost => "Geada",
            Self::RainAndSnow => "Chuva e neve",
            Self::ShowersAndThunder => "Aguaceiros e trovoada",
            Self::VariableCloudiness => "Nebulosidade variável",
            Self::Unknown => UNAVAILABLE_DESCRIPTION,
        }
    }
}

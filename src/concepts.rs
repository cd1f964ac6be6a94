//! Short explanations of the physics behind the plots, plus further reading.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Concept {
    PrincipalQuantumNumber,
    AzimuthalQuantumNumber,
    RadialWavefunction,
    RadialProbabilityDensity,
}

impl Concept {
    pub const ALL: [Concept; 4] = [
        Concept::PrincipalQuantumNumber,
        Concept::AzimuthalQuantumNumber,
        Concept::RadialWavefunction,
        Concept::RadialProbabilityDensity,
    ];

    /// Menu key, case-insensitive.
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "A" => Some(Concept::PrincipalQuantumNumber),
            "B" => Some(Concept::AzimuthalQuantumNumber),
            "C" => Some(Concept::RadialWavefunction),
            "D" => Some(Concept::RadialProbabilityDensity),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Concept::PrincipalQuantumNumber => 'A',
            Concept::AzimuthalQuantumNumber => 'B',
            Concept::RadialWavefunction => 'C',
            Concept::RadialProbabilityDensity => 'D',
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Concept::PrincipalQuantumNumber => "Principal Quantum Number",
            Concept::AzimuthalQuantumNumber => "Azimuthal Quantum Number",
            Concept::RadialWavefunction => "Radial Wavefunction",
            Concept::RadialProbabilityDensity => "Radial Probability Density",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Concept::PrincipalQuantumNumber => {
                "The principal quantum number (n) picks the energy level, or shell, of the \
                 electron. Larger n means a higher energy and an electron that spends most \
                 of its time further from the nucleus."
            }
            Concept::AzimuthalQuantumNumber => {
                "The azimuthal quantum number (l) sets the orbital angular momentum and with \
                 it the shape of the orbital within a shell: s (l=0), p (l=1), d (l=2) and so \
                 on. It can take any integer value from 0 up to n-1."
            }
            Concept::RadialWavefunction => {
                "The radial wavefunction R(r) is the part of the electron's wavefunction that \
                 depends only on the distance from the nucleus. Its sign changes at radial \
                 nodes, and there are n-l-1 of them."
            }
            Concept::RadialProbabilityDensity => {
                "The radial probability density P(r) = r^2 |R(r)|^2 tells how likely the \
                 electron is to be found in a thin shell at distance r, summed over every \
                 direction. Its peaks mark the most probable distances."
            }
        }
    }

    /// Video that covers the topic in more depth.
    pub fn reference(self) -> &'static str {
        match self {
            Concept::PrincipalQuantumNumber => "https://www.youtube.com/watch?v=eRIN9CPDrpo&t=3s",
            Concept::AzimuthalQuantumNumber => "https://www.youtube.com/watch?v=4sLXUr2HWIs&t=12s",
            Concept::RadialWavefunction => "https://www.youtube.com/watch?v=WUTgyBruBa8&t=40s",
            Concept::RadialProbabilityDensity => "https://www.youtube.com/watch?v=JyReivWigCg&t=1s",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}

pub const FURTHER_READING: [Resource; 5] = [
    Resource {
        title: "Introduction to Quantum Mechanics, 3rd edition - David J. Griffiths",
        url: "https://www.amazon.com/Introduction-Quantum-Mechanics-David-Griffiths/dp/1107189632",
    },
    Resource {
        title: "Quantum Physics for Beginners - Carl J. Pratt",
        url: "https://www.amazon.com/Quantum-Physics-Beginners-Understanding-Explanation/dp/B08YQJD281",
    },
    Resource {
        title: "The Little Book of String Theory - Steven S. Gubser",
        url: "https://www.amazon.com/Little-String-Theory-Science-Essentials/dp/0691142890",
    },
    Resource {
        title: "Real world use of quantum mechanics",
        url: "https://www.nsa.gov/Cybersecurity/Quantum-Key-Distribution-QKD-and-Quantum-Cryptography-QC/",
    },
    Resource {
        title: "How quantum mechanics affects you every day",
        url: "https://www.youtube.com/watch?v=KU9Z6WivvOg",
    },
];

/// Serializable view of one concept for the web API.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptEntry {
    pub key: char,
    pub title: &'static str,
    pub text: &'static str,
    pub reference: &'static str,
}

pub fn concept_table() -> Vec<ConceptEntry> {
    Concept::ALL
        .iter()
        .map(|&c| ConceptEntry {
            key: c.key(),
            title: c.title(),
            text: c.explanation(),
            reference: c.reference(),
        })
        .collect()
}

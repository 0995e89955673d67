//! Rational coefficients for the SaS point-5 density.
//!
//! Body segments are fitted in `x - lower` on each octave of `[0, 64]`; the
//! tail is fitted in `u = x^-1/2` and rescaled by `u^3` at the call site.

use super::rational::{Pade, Segment};

const PADE_0_0P25: Pade = Pade {
    numer: &[
        6.36619772367581343076e-1,
        2.08695290618996857630e2,
        3.27138231260799880672e4,
        3.12635260622309707764e6,
        1.98048081337216511381e8,
        8.56483679198669196462e9,
        2.52897673008030765179e11,
        4.97565108033799014273e12,
        6.17809824993213970941e13,
        4.39359884488046050026e14,
        1.62407973388917606167e15,
        3.05602866995962977259e15,
        4.16283837663175466754e15,
        4.33932052046202879986e15,
        1.98037038829086082130e15,
        2.11673879981348951641e14,
    ],
    denom: &[
        1.00000000000000000000e0,
        3.27817795923715088045e2,
        5.14467532018582990645e4,
        4.93053225788651363719e6,
        3.14164883876153657006e8,
        1.37444895081586710404e10,
        4.15331400451571813658e11,
        8.56868997354451418025e12,
        1.17651029229388237648e14,
        1.03622647547110519740e15,
        5.60383117050645616112e15,
        1.78609307498162312531e16,
        3.40114300916463634855e16,
        4.63563483570838873155e16,
        4.77894054692871071343e16,
        2.65130046251435019059e16,
        5.00269030614708036673e15,
        1.28890058960331124978e14,
    ],
};

const PADE_0P25_0P5: Pade = Pade {
    numer: &[
        2.95645445681747568732e-1,
        1.97411200998490091540e0,
        2.96639538497923278703e0,
        -2.11314593078651532185e0,
        -3.24647624911685089557e0,
        -4.16259541605596944447e-1,
        1.40473115910450455571e-2,
    ],
    denom: &[
        1.00000000000000000000e0,
        9.39607211623133600737e0,
        2.91651053913427485821e1,
        2.56594161726268984972e1,
        -2.43932432079171316468e1,
        -3.87779015677750197072e1,
        -9.84153122176909305802e0,
    ],
};

const PADE_0P5_1: Pade = Pade {
    numer: &[
        1.70762401725206223811e-1,
        8.43343631021918972436e-1,
        1.39703819152564365627e0,
        8.75843324574692085009e-1,
        1.86199552443747562584e-1,
        7.35858280181579907616e-3,
        -1.03693607694266081126e-4,
    ],
    denom: &[
        1.00000000000000000000e0,
        6.73363440952557318819e0,
        1.74288966619209299976e1,
        2.15943268035083671893e1,
        1.29818726981381859879e1,
        3.40707211426946022041e0,
        2.80229012541729457678e-1,
    ],
};

const PADE_1_2: Pade = Pade {
    numer: &[
        8.61071469126041183247e-2,
        1.69689585946245345838e-1,
        1.09494833291892212033e-1,
        2.76619622453130604637e-2,
        2.44972748006913061509e-3,
        4.09853605772288438003e-5,
        -2.63561415158954865283e-7,
    ],
    denom: &[
        1.00000000000000000000e0,
        3.04082856018856244947e0,
        3.52558663323956252986e0,
        1.94795523079701426332e0,
        5.23956733400745421623e-1,
        6.19453597593998871667e-2,
        2.31061984192347753499e-3,
    ],
};

const PADE_2_4: Pade = Pade {
    numer: &[
        3.91428580496513429479e-2,
        4.07162484034780126757e-2,
        1.43342733342753081931e-2,
        2.01622178115394696215e-3,
        1.00648013467757737201e-4,
        9.51545046750892356441e-7,
        -3.56598940936439037087e-9,
    ],
    denom: &[
        1.00000000000000000000e0,
        1.63904431617187026619e0,
        1.03812003196677309121e0,
        3.18144310790210668797e-1,
        4.81930155615666517263e-2,
        3.25435391589941361778e-3,
        7.01626957128181647457e-5,
    ],
};

const PADE_4_8: Pade = Pade {
    numer: &[
        1.65057384221262866484e-2,
        8.05429762031495873704e-3,
        1.35249234647852784985e-3,
        9.18685252682786794440e-5,
        2.23447790937806602674e-6,
        1.03176916111395079569e-8,
        -1.94913182592441292094e-11,
    ],
    denom: &[
        1.00000000000000000000e0,
        8.10113554189626079232e-1,
        2.54175325409968367580e-1,
        3.87119072807894983910e-2,
        2.92520770162792443587e-3,
        9.89094130526684467420e-5,
        1.07148513311070719488e-6,
    ],
};

const PADE_8_16: Pade = Pade {
    numer: &[
        6.60044810497290557553e-3,
        1.59342644994950292031e-3,
        1.32429706922966110874e-4,
        4.45378136978435909660e-6,
        5.36409958111394628239e-8,
        1.22293787679910067873e-10,
        -1.16300443044165216564e-13,
    ],
    denom: &[
        1.00000000000000000000e0,
        4.10446485803039594111e-1,
        6.51887342399859289520e-2,
        5.02151225308643905366e-3,
        1.91741179639551137839e-4,
        3.27316600311598190022e-6,
        1.78840301213102212857e-8,
    ],
};

const PADE_16_32: Pade = Pade {
    numer: &[
        2.54339461777955741686e-3,
        3.10069525357852579756e-4,
        1.30082682796085732756e-5,
        2.20715868479255585050e-7,
        1.33996659756026452288e-9,
        1.53505360463827994365e-12,
        -7.42649416356965421308e-16,
    ],
    denom: &[
        1.00000000000000000000e0,
        2.09203384450859785642e-1,
        1.69422626897631306130e-2,
        6.65649059670689720386e-4,
        1.29654785666009849481e-5,
        1.12886139474560969619e-7,
        3.14420104899170413840e-10,
    ],
};

const PADE_32_64: Pade = Pade {
    numer: &[
        9.55085695067883584460e-4,
        5.86125496733202756668e-5,
        1.23753971325810931282e-6,
        1.05643819745933041408e-8,
        3.22502949410095015524e-11,
        1.85366144680157942079e-14,
        -4.53975807317403152058e-18,
    ],
    denom: &[
        1.00000000000000000000e0,
        1.05980850386474826374e-1,
        4.34966042652000070674e-3,
        8.66341538387446465700e-5,
        8.55608082202236124363e-7,
        3.77719968378509293354e-9,
        5.33287361559571716670e-12,
    ],
};

const PADE_LIMIT: Pade = Pade {
    numer: &[
        1.99471140200716338970e-1,
        -1.93310094131437487158e-2,
        -8.44282614309073196195e-3,
        3.47296024282356038069e-3,
        -4.05398011689821941383e-4,
    ],
    denom: &[
        1.00000000000000000000e0,
        7.00973251258577238892e-1,
        2.66969681258835723157e-1,
        5.51785147503612200456e-2,
        6.50130030979966274341e-3,
    ],
};

/// Body segments of `[0, 64]`, ordered by upper bound.
pub(crate) const BODY: [Segment; 9] = [
    Segment::new(0.25, 0.0, PADE_0_0P25),
    Segment::new(0.5, 0.25, PADE_0P25_0P5),
    Segment::new(1.0, 0.5, PADE_0P5_1),
    Segment::new(2.0, 1.0, PADE_1_2),
    Segment::new(4.0, 2.0, PADE_2_4),
    Segment::new(8.0, 4.0, PADE_4_8),
    Segment::new(16.0, 8.0, PADE_8_16),
    Segment::new(32.0, 16.0, PADE_16_32),
    Segment::new(64.0, 32.0, PADE_32_64),
];

/// Tail rational in `u = 1/sqrt(x)` for `x > 64`.
pub(crate) const TAIL: Pade = PADE_LIMIT;
